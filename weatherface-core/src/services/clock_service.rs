use weatherface_common::*;

pub struct ClockService {
    face: ClockFace,
}

impl ClockService {
    pub fn new() -> Self {
        Self {
            face: ClockFace::default(),
        }
    }

    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    /// Rewrites the time, date and meridian buffers for `time` and pushes them
    /// to the display.
    pub fn update_time<D: TextDisplay>(&mut self, time: &TickTime, use_24h: bool, display: &mut D) {
        let hour = if use_24h { time.hour } else { hour_12(time.hour) };
        write_truncated(&mut self.face.time, format_args!("{:02}:{:02}", hour, time.minute));
        write_truncated(&mut self.face.date, format_args!("{:02}-{:02}", time.month, time.day));
        copy_truncated(&mut self.face.meridian, meridian(time.hour));

        debug!(
            "Clock updated: {} {} {}",
            self.face.time.as_str(),
            self.face.meridian.as_str(),
            self.face.date.as_str()
        );

        push_text(display, TextRegion::Time, self.face.time.as_str());
        push_text(display, TextRegion::Date, self.face.date.as_str());
        push_text(display, TextRegion::Meridian, self.face.meridian.as_str());
    }
}

impl Default for ClockService {
    fn default() -> Self {
        Self::new()
    }
}

/// 12-hour clock hour, 0 and 12 both read as 12.
pub fn hour_12(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Half-day indicator for a 24-hour `hour`.
pub fn meridian(hour: u8) -> &'static str {
    if hour > 11 { "PM" } else { "AM" }
}

pub(crate) fn push_text<D: TextDisplay>(display: &mut D, region: TextRegion, text: &str) {
    if let Err(e) = display.set_text(region, text) {
        warn!("Failed to set {:?} text: {:?}", region, e);
    }
}
