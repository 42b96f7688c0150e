use weatherface_common::*;

struct RegionState {
    frame: Rect,
    text: String,
}

/// Text display that prints every change to the log instead of a screen.
pub struct ConsoleDisplay {
    regions: [Option<RegionState>; 4],
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self {
            regions: [None, None, None, None],
        }
    }

    fn region_mut(&mut self, region: TextRegion) -> Result<&mut RegionState, DisplayError> {
        self.regions[region.index()]
            .as_mut()
            .ok_or(DisplayError::UnknownRegion)
    }

    /// One line per region, top to bottom.
    pub fn render(&self) -> String {
        let mut rows: Vec<&RegionState> = self.regions.iter().flatten().collect();
        rows.sort_by_key(|r| (r.frame.y, r.frame.x));
        rows.iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDisplay for ConsoleDisplay {
    fn create_region(&mut self, region: TextRegion, frame: Rect) -> Result<(), DisplayError> {
        let slot = &mut self.regions[region.index()];
        if slot.is_some() {
            return Err(DisplayError::RegionExists);
        }
        debug!("[Simulator Display] Create {:?} at {:?}", region, frame);
        *slot = Some(RegionState {
            frame,
            text: String::new(),
        });
        Ok(())
    }

    fn set_text(&mut self, region: TextRegion, text: &str) -> Result<(), DisplayError> {
        let state = self.region_mut(region)?;
        if state.text == text {
            return Ok(());
        }
        state.text.clear();
        state.text.push_str(text);
        info!("[Simulator Display] {:?} <- \"{}\"", region, text);
        info!("[Simulator Display] {}", self.render());
        Ok(())
    }

    fn set_style(&mut self, region: TextRegion, style: RegionStyle) -> Result<(), DisplayError> {
        self.region_mut(region)?;
        debug!("[Simulator Display] Restyle {:?} with {:?}", region, style);
        Ok(())
    }

    fn destroy_region(&mut self, region: TextRegion) -> Result<(), DisplayError> {
        self.regions[region.index()]
            .take()
            .map(|_| debug!("[Simulator Display] Destroy {:?}", region))
            .ok_or(DisplayError::UnknownRegion)
    }
}
