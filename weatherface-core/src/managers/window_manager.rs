use weatherface_common::*;

/// Geometry, style and placeholder text of one text region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionLayout {
    pub region: TextRegion,
    pub frame: Rect,
    pub style: RegionStyle,
    pub placeholder: &'static str,
}

/// Regions in the order they are created on load.
pub const WATCHFACE_LAYOUT: [RegionLayout; 4] = [
    RegionLayout {
        region: TextRegion::Time,
        frame: Rect::new(3, 50, 142, 60),
        style: RegionStyle::new(FontKey::Bitham42Light, TextAlignment::Center),
        placeholder: "00:00",
    },
    RegionLayout {
        region: TextRegion::Meridian,
        frame: Rect::new(100, 100, 32, 24),
        style: RegionStyle::new(FontKey::Gothic14, TextAlignment::Left),
        placeholder: "MM",
    },
    RegionLayout {
        region: TextRegion::Date,
        frame: Rect::new(30, 100, 32, 24),
        style: RegionStyle::new(FontKey::Gothic14, TextAlignment::Left),
        placeholder: "00-00",
    },
    RegionLayout {
        region: TextRegion::Weather,
        frame: Rect::new(0, 130, 144, 25),
        style: RegionStyle::new(FontKey::Gothic24, TextAlignment::Center),
        placeholder: "Loading...",
    },
];

pub struct WindowManager {
    loaded: bool,
}

impl WindowManager {
    pub fn new() -> Self {
        Self { loaded: false }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Creates every region, applies its style and seeds its placeholder
    /// text.
    pub fn load<D: TextDisplay>(&mut self, display: &mut D) -> SystemResult<()> {
        if self.loaded {
            warn!("Window already loaded");
            return Ok(());
        }

        info!("Loading main window");
        for layout in WATCHFACE_LAYOUT.iter() {
            display.create_region(layout.region, layout.frame)?;
            display.set_style(layout.region, layout.style)?;
            display.set_text(layout.region, layout.placeholder)?;
        }

        self.loaded = true;
        Ok(())
    }

    /// Destroys every region. Keeps going past individual failures and
    /// reports the first one.
    pub fn unload<D: TextDisplay>(&mut self, display: &mut D) -> SystemResult<()> {
        if !self.loaded {
            return Ok(());
        }

        info!("Unloading main window");
        let mut first_error = None;
        for layout in WATCHFACE_LAYOUT.iter() {
            if let Err(e) = display.destroy_region(layout.region) {
                warn!("Failed to destroy {:?}: {:?}", layout.region, e);
                first_error.get_or_insert(e);
            }
        }

        self.loaded = false;
        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}
