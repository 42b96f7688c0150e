use heapless::String;

/// Temperature field, "<value>F".
pub const TEMPERATURE_CAPACITY: usize = 7;
/// Conditions field, copied verbatim.
pub const CONDITIONS_CAPACITY: usize = 31;
/// Wind speed field, "<value>MPH".
pub const WIND_SPEED_CAPACITY: usize = 7;
/// Composed "<temperature>, <conditions>, <wind speed>" line.
pub const WEATHER_SUMMARY_CAPACITY: usize = 39;

/// Keys the companion uses in a weather reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum WeatherKey {
    Temperature = 0,
    Conditions = 1,
    WindSpeed = 2,
}

impl TryFrom<u32> for WeatherKey {
    type Error = u32;

    fn try_from(key: u32) -> Result<Self, Self::Error> {
        match key {
            0 => Ok(WeatherKey::Temperature),
            1 => Ok(WeatherKey::Conditions),
            2 => Ok(WeatherKey::WindSpeed),
            other => Err(other),
        }
    }
}

/// Last received value of each weather field, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeatherReading {
    pub temperature: String<TEMPERATURE_CAPACITY>,
    pub conditions: String<CONDITIONS_CAPACITY>,
    pub wind_speed: String<WIND_SPEED_CAPACITY>,
}

/// Whether the watch is waiting on a reply to its last request. Purely
/// informational: it never blocks a new request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangeState {
    #[default]
    Idle,
    RequestSent,
}
