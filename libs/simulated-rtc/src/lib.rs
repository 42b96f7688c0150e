use core::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};
use weatherface_common::{TickTime, WallClock};

/// Host-clock backed wall clock. `set_time` shifts it by a fixed offset so a
/// simulation can start just before a request minute.
pub struct SimulatedRtc {
    offset_secs: AtomicI64,
    use_24h: AtomicBool,
    time_zone: TimeZone,
}

impl SimulatedRtc {
    pub fn new() -> Self {
        Self::with_time_zone(TimeZone::system())
    }

    pub fn with_time_zone(time_zone: TimeZone) -> Self {
        Self {
            offset_secs: AtomicI64::new(0),
            use_24h: AtomicBool::new(true),
            time_zone,
        }
    }

    pub fn set_time(&self, target: Timestamp) {
        let offset = target.as_second() - Timestamp::now().as_second();
        self.offset_secs.store(offset, Ordering::SeqCst);
        log::info!("Simulated RTC time set to: {}", target);
    }

    pub fn set_24h_style(&self, enabled: bool) {
        self.use_24h.store(enabled, Ordering::SeqCst);
    }

    pub fn timestamp(&self) -> Timestamp {
        let now = Timestamp::now();
        let offset = SignedDuration::from_secs(self.offset_secs.load(Ordering::SeqCst));
        now.checked_add(offset).unwrap_or(now)
    }
}

impl Default for SimulatedRtc {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock for SimulatedRtc {
    fn now(&self) -> TickTime {
        self.timestamp().to_zoned(self.time_zone.clone()).datetime().into()
    }

    fn is_24h_style(&self) -> bool {
        self.use_24h.load(Ordering::SeqCst)
    }
}
