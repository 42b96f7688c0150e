use core::ops::{BitOr, BitOrAssign};

/// Broken-down local time, the way the host timer service hands it to a
/// tick callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TickTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Days since Sunday, 0..=6.
    pub weekday: u8,
}

impl TickTime {
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8, weekday: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            weekday,
        }
    }

    /// Units that differ between `previous` and `self`.
    pub fn units_changed(&self, previous: &TickTime) -> TimeUnits {
        let mut units = TimeUnits::empty();
        if self.second != previous.second {
            units |= TimeUnits::SECOND;
        }
        if self.minute != previous.minute {
            units |= TimeUnits::MINUTE;
        }
        if self.hour != previous.hour {
            units |= TimeUnits::HOUR;
        }
        if self.day != previous.day {
            units |= TimeUnits::DAY;
        }
        if self.month != previous.month {
            units |= TimeUnits::MONTH;
        }
        if self.year != previous.year {
            units |= TimeUnits::YEAR;
        }
        units
    }

    /// True when `self` falls in a later minute than `previous`.
    pub fn is_later_minute_than(&self, previous: &TickTime) -> bool {
        self.minute_key() > previous.minute_key()
    }

    fn minute_key(&self) -> (u16, u8, u8, u8, u8) {
        (self.year, self.month, self.day, self.hour, self.minute)
    }
}

impl From<jiff::civil::DateTime> for TickTime {
    fn from(dt: jiff::civil::DateTime) -> Self {
        Self {
            year: dt.year() as u16,
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
            weekday: dt.weekday().to_sunday_zero_offset() as u8,
        }
    }
}

/// Bitmask of the time units that changed since the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeUnits(u8);

impl TimeUnits {
    pub const SECOND: TimeUnits = TimeUnits(1 << 0);
    pub const MINUTE: TimeUnits = TimeUnits(1 << 1);
    pub const HOUR: TimeUnits = TimeUnits(1 << 2);
    pub const DAY: TimeUnits = TimeUnits(1 << 3);
    pub const MONTH: TimeUnits = TimeUnits(1 << 4);
    pub const YEAR: TimeUnits = TimeUnits(1 << 5);

    pub const fn empty() -> Self {
        TimeUnits(0)
    }

    pub const fn all() -> Self {
        TimeUnits(0b0011_1111)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn contains(&self, other: TimeUnits) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for TimeUnits {
    type Output = TimeUnits;

    fn bitor(self, rhs: TimeUnits) -> TimeUnits {
        TimeUnits(self.0 | rhs.0)
    }
}

impl BitOrAssign for TimeUnits {
    fn bitor_assign(&mut self, rhs: TimeUnits) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_changed_on_hour_rollover() {
        let before = TickTime::new(2024, 3, 5, 9, 59, 0, 2);
        let after = TickTime::new(2024, 3, 5, 10, 0, 0, 2);
        let units = after.units_changed(&before);
        assert!(units.contains(TimeUnits::MINUTE | TimeUnits::HOUR));
        assert!(!units.contains(TimeUnits::DAY));
        assert!(!units.contains(TimeUnits::SECOND));
    }

    #[test]
    fn test_units_changed_on_new_year() {
        let before = TickTime::new(2023, 12, 31, 23, 59, 0, 0);
        let after = TickTime::new(2024, 1, 1, 0, 0, 0, 1);
        assert_eq!(after.units_changed(&before), TimeUnits::all().without_second());
    }

    #[test]
    fn test_later_minute_ignores_seconds() {
        let a = TickTime::new(2024, 3, 5, 9, 30, 0, 2);
        let b = TickTime::new(2024, 3, 5, 9, 30, 45, 2);
        let c = TickTime::new(2024, 3, 5, 9, 31, 0, 2);
        assert!(!b.is_later_minute_than(&a));
        assert!(c.is_later_minute_than(&b));
    }

    #[test]
    fn test_from_civil_datetime() {
        let dt = jiff::civil::date(2024, 3, 5).at(14, 7, 12, 0);
        let t = TickTime::from(dt);
        assert_eq!(t, TickTime::new(2024, 3, 5, 14, 7, 12, 2));
    }

    impl TimeUnits {
        fn without_second(self) -> Self {
            TimeUnits(self.0 & !TimeUnits::SECOND.0)
        }
    }
}
