//! Recording fakes for the platform ports.

use std::string::{String, ToString};
use std::vec::Vec;

use weatherface_common::*;

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub created: Vec<(TextRegion, Rect)>,
    pub destroyed: Vec<TextRegion>,
    pub writes: Vec<(TextRegion, String)>,
    texts: [Option<String>; 4],
    styles: [Option<RegionStyle>; 4],
    /// When set, regions need not be created before text is written.
    pub lenient: bool,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            lenient: true,
            ..Default::default()
        }
    }

    pub fn strict() -> Self {
        Self::default()
    }

    pub fn text(&self, region: TextRegion) -> Option<&str> {
        self.texts[region.index()].as_deref()
    }

    pub fn style(&self, region: TextRegion) -> Option<RegionStyle> {
        self.styles[region.index()]
    }

    pub fn writes_to(&self, region: TextRegion) -> Vec<&str> {
        self.writes
            .iter()
            .filter(|(r, _)| *r == region)
            .map(|(_, t)| t.as_str())
            .collect()
    }
}

impl TextDisplay for RecordingDisplay {
    fn create_region(&mut self, region: TextRegion, frame: Rect) -> Result<(), DisplayError> {
        if self.texts[region.index()].is_some() {
            return Err(DisplayError::RegionExists);
        }
        self.created.push((region, frame));
        self.texts[region.index()] = Some(String::new());
        Ok(())
    }

    fn set_text(&mut self, region: TextRegion, text: &str) -> Result<(), DisplayError> {
        if !self.lenient && self.texts[region.index()].is_none() {
            return Err(DisplayError::UnknownRegion);
        }
        self.writes.push((region, text.to_string()));
        self.texts[region.index()] = Some(text.to_string());
        Ok(())
    }

    fn set_style(&mut self, region: TextRegion, style: RegionStyle) -> Result<(), DisplayError> {
        if self.texts[region.index()].is_none() {
            return Err(DisplayError::UnknownRegion);
        }
        self.styles[region.index()] = Some(style);
        Ok(())
    }

    fn destroy_region(&mut self, region: TextRegion) -> Result<(), DisplayError> {
        if self.texts[region.index()].take().is_none() {
            return Err(DisplayError::UnknownRegion);
        }
        self.styles[region.index()] = None;
        self.destroyed.push(region);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingOutbox {
    pub sent: Vec<AppMessage>,
    pub opened: Option<(usize, usize)>,
    /// Result returned by the next `send`, `None` accepts it.
    pub fail_with: Option<AppMessageResult>,
    pub open_fails_with: Option<AppMessageResult>,
}

impl AppMessageOutbox for RecordingOutbox {
    fn inbox_size_maximum(&self) -> usize {
        APP_MESSAGE_BUFFER_SIZE
    }

    fn outbox_size_maximum(&self) -> usize {
        APP_MESSAGE_BUFFER_SIZE
    }

    fn open(&mut self, inbox_size: usize, outbox_size: usize) -> Result<(), AppMessageResult> {
        if let Some(reason) = self.open_fails_with {
            return Err(reason);
        }
        self.opened = Some((inbox_size, outbox_size));
        Ok(())
    }

    fn send(&mut self, message: &AppMessage) -> Result<(), AppMessageResult> {
        if let Some(reason) = self.fail_with {
            return Err(reason);
        }
        self.sent.push(message.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: TickTime,
    pub use_24h: bool,
}

impl WallClock for FixedClock {
    fn now(&self) -> TickTime {
        self.now
    }

    fn is_24h_style(&self) -> bool {
        self.use_24h
    }
}

pub fn at(hour: u8, minute: u8) -> TickTime {
    TickTime::new(2024, 3, 5, hour, minute, 0, 2)
}

pub fn weather_reply(temperature: i32, conditions: &str, wind_speed: i32) -> AppMessage {
    let mut msg = AppMessage::new();
    let _ = msg.push(Tuple::int32(WeatherKey::Temperature as u32, temperature));
    let _ = msg.push(Tuple::cstring(WeatherKey::Conditions as u32, conditions));
    let _ = msg.push(Tuple::int32(WeatherKey::WindSpeed as u32, wind_speed));
    msg
}
