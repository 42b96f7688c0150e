/// Minutes between weather requests, aligned to the wall clock.
pub const WEATHER_REQUEST_INTERVAL_MINUTES: u8 = 30;

/// Capacity of the system event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 10;

/// Upper bound on tuples carried by one app message.
pub const MAX_TUPLES: usize = 8;

/// Upper bound on the value bytes of a single tuple.
pub const MAX_VALUE_LEN: usize = 64;

/// Largest dictionary the inbox or outbox will ever hold.
pub const APP_MESSAGE_BUFFER_SIZE: usize = 1 + MAX_TUPLES * (4 + 1 + 2 + MAX_VALUE_LEN);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchfaceConfig {
    pub weather_request_interval_minutes: u8,
    pub weather_request_key: u32,
    pub weather_request_value: u8,
}

impl WatchfaceConfig {
    pub const fn new() -> Self {
        Self {
            weather_request_interval_minutes: WEATHER_REQUEST_INTERVAL_MINUTES,
            weather_request_key: 0,
            weather_request_value: 0,
        }
    }

    /// Whether a tick at `minute` should ask the companion for weather.
    pub fn is_weather_request_minute(&self, minute: u8) -> bool {
        self.weather_request_interval_minutes != 0
            && minute % self.weather_request_interval_minutes == 0
    }
}

impl Default for WatchfaceConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_minutes_are_wall_clock_half_hours() {
        let config = WatchfaceConfig::default();
        assert!(config.is_weather_request_minute(0));
        assert!(config.is_weather_request_minute(30));
        assert!(!config.is_weather_request_minute(59));
        assert!(!config.is_weather_request_minute(7));
        assert!(!config.is_weather_request_minute(15));
    }

    #[test]
    fn test_zero_interval_never_requests() {
        let config = WatchfaceConfig {
            weather_request_interval_minutes: 0,
            ..WatchfaceConfig::default()
        };
        assert!(!config.is_weather_request_minute(0));
    }
}
