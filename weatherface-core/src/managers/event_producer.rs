use embassy_time::{Duration, Timer};

use weatherface_common::*;

pub struct EventProducer {
    last_tick: Option<TickTime>,
}

impl EventProducer {
    pub fn new() -> Self {
        Self { last_tick: None }
    }

    /// Seeds the producer with the time the watchface started at, so the
    /// first tick reports the units changed since then.
    pub fn starting_at(time: TickTime) -> Self {
        Self {
            last_tick: Some(time),
        }
    }

    /// Builds the tick for `now`, or `None` if that minute was already
    /// ticked.
    pub fn next_tick(&mut self, now: TickTime) -> Option<SystemEvent> {
        let units_changed = match self.last_tick {
            Some(previous) if !now.is_later_minute_than(&previous) => return None,
            Some(previous) => now.units_changed(&previous),
            None => TimeUnits::all(),
        };
        self.last_tick = Some(now);
        Some(SystemEvent::minute_tick(now, units_changed))
    }

    /// Sleeps until each wall-clock minute boundary and emits a tick.
    pub async fn start_minute_timer<C: WallClock>(
        &mut self,
        clock: C,
        sender: WatchChannelSender<'_, SystemEvent>,
    ) {
        info!("Starting minute timer");
        loop {
            let delay = seconds_until_next_minute(&clock.now());
            Timer::after(Duration::from_secs(delay)).await;

            if let Some(event) = self.next_tick(clock.now()) {
                debug!("Minute tick: {:?}", event);
                sender.send(event).await;
            }
        }
    }
}

/// Seconds to sleep so the next wake lands on a minute boundary. Leap
/// seconds are clamped so the delay is never zero.
pub fn seconds_until_next_minute(now: &TickTime) -> u64 {
    60 - now.second.min(59) as u64
}

impl Default for EventProducer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::at;

    fn tick_units(event: SystemEvent) -> TimeUnits {
        match event {
            SystemEvent::TimeEvent(TimeEvent::MinuteTick { units_changed, .. }) => units_changed,
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_first_tick_reports_all_units() {
        let mut producer = EventProducer::new();
        let event = producer.next_tick(at(9, 30)).unwrap();
        assert_eq!(tick_units(event), TimeUnits::all());
    }

    #[test]
    fn test_same_minute_is_not_ticked_twice() {
        let mut producer = EventProducer::starting_at(at(9, 29));

        assert!(producer.next_tick(at(9, 30)).is_some());
        let mut late = at(9, 30);
        late.second = 59;
        assert!(producer.next_tick(late).is_none());
        assert!(producer.next_tick(at(9, 31)).is_some());
    }

    #[test]
    fn test_clock_going_backwards_is_ignored() {
        let mut producer = EventProducer::starting_at(at(9, 30));
        assert!(producer.next_tick(at(9, 29)).is_none());
    }

    #[test]
    fn test_delay_aligns_to_minute_boundary() {
        let mut now = at(9, 30);
        assert_eq!(seconds_until_next_minute(&now), 60);

        now.second = 59;
        assert_eq!(seconds_until_next_minute(&now), 1);

        now.second = 60;
        assert_eq!(seconds_until_next_minute(&now), 1);
    }

    #[test]
    fn test_hour_rollover_units() {
        let mut producer = EventProducer::starting_at(at(9, 59));
        let units = tick_units(producer.next_tick(at(10, 0)).unwrap());
        assert!(units.contains(TimeUnits::MINUTE));
        assert!(units.contains(TimeUnits::HOUR));
        assert!(!units.contains(TimeUnits::DAY));
    }
}
