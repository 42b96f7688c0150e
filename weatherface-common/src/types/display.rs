use heapless::String;

/// Length of "HH:MM".
pub const TIME_CAPACITY: usize = 5;
/// Length of "AM"/"PM".
pub const MERIDIAN_CAPACITY: usize = 2;
/// Length of "MM-DD".
pub const DATE_CAPACITY: usize = 5;

/// The four text regions of the watchface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRegion {
    Time,
    Meridian,
    Date,
    Weather,
}

impl TextRegion {
    pub const ALL: [TextRegion; 4] = [
        TextRegion::Time,
        TextRegion::Meridian,
        TextRegion::Date,
        TextRegion::Weather,
    ];

    pub const fn index(&self) -> usize {
        match self {
            TextRegion::Time => 0,
            TextRegion::Meridian => 1,
            TextRegion::Date => 2,
            TextRegion::Weather => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: i16, y: i16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Clear,
    Black,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// System fonts the watchface asks the host for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKey {
    Gothic14,
    Gothic24,
    Bitham42Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionStyle {
    pub font: FontKey,
    pub text_color: Color,
    pub background: Color,
    pub alignment: TextAlignment,
}

impl RegionStyle {
    pub const fn new(font: FontKey, alignment: TextAlignment) -> Self {
        Self {
            font,
            text_color: Color::Black,
            background: Color::Clear,
            alignment,
        }
    }
}

/// Text most recently produced for the clock regions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClockFace {
    pub time: String<TIME_CAPACITY>,
    pub meridian: String<MERIDIAN_CAPACITY>,
    pub date: String<DATE_CAPACITY>,
}
