use heapless::String;
use weatherface_common::*;

use crate::services::clock_service::push_text;

/// Weather half of the watchface: asks the companion for weather on the
/// half hour and turns its replies into the summary line.
pub struct WeatherService {
    config: WatchfaceConfig,
    reading: WeatherReading,
    summary: String<WEATHER_SUMMARY_CAPACITY>,
    state: ExchangeState,
}

impl WeatherService {
    pub fn new(config: WatchfaceConfig) -> Self {
        Self {
            config,
            reading: WeatherReading::default(),
            summary: String::new(),
            state: ExchangeState::Idle,
        }
    }

    pub fn reading(&self) -> &WeatherReading {
        &self.reading
    }

    pub fn summary(&self) -> &str {
        self.summary.as_str()
    }

    pub fn state(&self) -> ExchangeState {
        self.state
    }

    /// Sends a weather request when `time` lands on a request minute.
    /// Returns whether a request was handed to the outbox.
    pub fn on_tick<O: AppMessageOutbox>(&mut self, time: &TickTime, outbox: &mut O) -> bool {
        if !self.config.is_weather_request_minute(time.minute) {
            return false;
        }
        self.request_weather(outbox).is_ok()
    }

    /// Submits the one-pair trigger message. Failures are not retried; the
    /// next request minute is the retry.
    pub fn request_weather<O: AppMessageOutbox>(&mut self, outbox: &mut O) -> SystemResult<()> {
        let request = AppMessage::new()
            .with(Tuple::uint8(
                self.config.weather_request_key,
                self.config.weather_request_value,
            ))
            .map_err(|_| SystemError::Message(AppMessageResult::BufferOverflow))?;

        match outbox.send(&request) {
            Ok(()) => {
                info!("Weather request sent");
                self.state = ExchangeState::RequestSent;
                Ok(())
            }
            Err(reason) => {
                error!("Weather request not sent: {}", reason);
                Err(reason.into())
            }
        }
    }

    /// Applies every tuple of a reply in arrival order. The summary is
    /// recomposed and pushed after each tuple, so a partial reply shows new
    /// fields next to stale ones.
    pub fn inbox_received<D: TextDisplay>(&mut self, message: &AppMessage, display: &mut D) {
        self.state = ExchangeState::Idle;

        for tuple in message {
            match WeatherKey::try_from(tuple.key) {
                Ok(WeatherKey::Temperature) => match tuple.value.as_i32() {
                    Some(v) => write_truncated(&mut self.reading.temperature, format_args!("{}F", v)),
                    None => warn!("Temperature has unexpected value {:?}", tuple.value),
                },
                Ok(WeatherKey::Conditions) => match &tuple.value {
                    TupleValue::CString(s) => copy_truncated(&mut self.reading.conditions, s.as_str()),
                    TupleValue::Int(v, _) => write_truncated(&mut self.reading.conditions, format_args!("{}", v)),
                    TupleValue::Uint(v, _) => write_truncated(&mut self.reading.conditions, format_args!("{}", v)),
                    other => warn!("Conditions has unexpected value {:?}", other),
                },
                Ok(WeatherKey::WindSpeed) => match tuple.value.as_i32() {
                    Some(v) => write_truncated(&mut self.reading.wind_speed, format_args!("{}MPH", v)),
                    None => warn!("Wind speed has unexpected value {:?}", tuple.value),
                },
                Err(key) => error!("Key {} not recognized!", key),
            }

            self.compose_summary();
            push_text(display, TextRegion::Weather, self.summary.as_str());
        }
    }

    pub fn inbox_dropped(&mut self, reason: AppMessageResult) {
        self.state = ExchangeState::Idle;
        error!("Message dropped! ({})", reason);
    }

    pub fn outbox_sent(&mut self, _message: &AppMessage) {
        self.state = ExchangeState::Idle;
        info!("Outbox send success!");
    }

    pub fn outbox_failed(&mut self, _message: &AppMessage, reason: AppMessageResult) {
        self.state = ExchangeState::Idle;
        error!("Outbox send failed! ({})", reason);
    }

    fn compose_summary(&mut self) {
        write_truncated(
            &mut self.summary,
            format_args!(
                "{}, {}, {}",
                self.reading.temperature.as_str(),
                self.reading.conditions.as_str(),
                self.reading.wind_speed.as_str()
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingDisplay, RecordingOutbox, at, weather_reply};

    fn service() -> WeatherService {
        WeatherService::new(WatchfaceConfig::default())
    }

    fn message(tuples: &[Tuple]) -> AppMessage {
        let mut msg = AppMessage::new();
        for t in tuples {
            msg.push(t.clone()).unwrap();
        }
        msg
    }

    #[test]
    fn test_requests_only_on_half_hours() {
        let mut weather = service();
        let mut outbox = RecordingOutbox::default();

        for minute in 0..60u8 {
            let sent = weather.on_tick(&at(10, minute), &mut outbox);
            assert_eq!(sent, minute % 30 == 0, "minute {minute}");
        }

        assert_eq!(outbox.sent.len(), 2);
    }

    #[test]
    fn test_boundary_minutes() {
        let mut weather = service();
        let mut outbox = RecordingOutbox::default();

        assert!(weather.on_tick(&at(0, 0), &mut outbox));
        assert!(weather.on_tick(&at(0, 30), &mut outbox));
        assert!(!weather.on_tick(&at(0, 59), &mut outbox));
        assert_eq!(outbox.sent.len(), 2);
    }

    #[test]
    fn test_request_is_single_uint8_zero() {
        let mut weather = service();
        let mut outbox = RecordingOutbox::default();

        weather.request_weather(&mut outbox).unwrap();

        let request = &outbox.sent[0];
        assert_eq!(request.len(), 1);
        let tuple = request.find(0).unwrap();
        assert_eq!(tuple.value, TupleValue::Uint(0, 1));
        assert_eq!(weather.state(), ExchangeState::RequestSent);
    }

    #[test]
    fn test_outstanding_request_does_not_block_next() {
        let mut weather = service();
        let mut outbox = RecordingOutbox::default();

        assert!(weather.on_tick(&at(9, 0), &mut outbox));
        assert_eq!(weather.state(), ExchangeState::RequestSent);
        assert!(weather.on_tick(&at(9, 30), &mut outbox));
        assert_eq!(outbox.sent.len(), 2);
    }

    #[test]
    fn test_send_failure_is_not_retried() {
        let mut weather = service();
        let mut outbox = RecordingOutbox {
            fail_with: Some(AppMessageResult::NotConnected),
            ..Default::default()
        };

        assert!(!weather.on_tick(&at(9, 30), &mut outbox));
        assert!(!weather.on_tick(&at(9, 31), &mut outbox));
        assert!(outbox.sent.is_empty());
        assert_eq!(weather.state(), ExchangeState::Idle);
        assert_eq!(
            weather.request_weather(&mut outbox),
            Err(SystemError::Message(AppMessageResult::NotConnected))
        );
    }

    #[test]
    fn test_full_reply_in_any_order() {
        let orders: [[usize; 3]; 6] = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        let tuples = [Tuple::int32(0, 72), Tuple::cstring(1, "Cloudy"), Tuple::int32(2, 9)];

        for order in orders {
            let mut weather = service();
            let mut display = RecordingDisplay::new();
            let msg = message(&order.map(|i| tuples[i].clone()));

            weather.inbox_received(&msg, &mut display);

            assert_eq!(display.text(TextRegion::Weather), Some("72F, Cloudy, 9MPH"));
        }
    }

    #[test]
    fn test_summary_pushed_after_each_tuple() {
        let mut weather = service();
        let mut display = RecordingDisplay::new();

        weather.inbox_received(&weather_reply(72, "Cloudy", 9), &mut display);

        assert_eq!(
            display.writes_to(TextRegion::Weather),
            ["72F, , ", "72F, Cloudy, ", "72F, Cloudy, 9MPH"]
        );
    }

    #[test]
    fn test_partial_reply_keeps_stale_fields() {
        let mut weather = service();
        let mut display = RecordingDisplay::new();

        weather.inbox_received(&weather_reply(60, "Rain", 15), &mut display);
        weather.inbox_received(&message(&[Tuple::int32(0, 72)]), &mut display);

        assert_eq!(display.text(TextRegion::Weather), Some("72F, Rain, 15MPH"));
    }

    #[test]
    fn test_temperature_only_on_fresh_start() {
        let mut weather = service();
        let mut display = RecordingDisplay::new();

        weather.inbox_received(&message(&[Tuple::int32(0, 72)]), &mut display);

        assert_eq!(weather.summary(), "72F, , ");
    }

    #[test]
    fn test_replay_is_idempotent() {
        let mut weather = service();
        let mut display = RecordingDisplay::new();
        let msg = weather_reply(-3, "Snow", 21);

        weather.inbox_received(&msg, &mut display);
        let first = weather.summary().to_owned();
        weather.inbox_received(&msg, &mut display);

        assert_eq!(weather.summary(), first);
        assert_eq!(first, "-3F, Snow, 21MPH");
    }

    #[test]
    fn test_unknown_key_leaves_fields_alone() {
        let mut weather = service();
        let mut display = RecordingDisplay::new();

        weather.inbox_received(&weather_reply(72, "Cloudy", 9), &mut display);
        let before = weather.reading().clone();
        weather.inbox_received(&message(&[Tuple::int32(5, 1234)]), &mut display);

        assert_eq!(weather.reading(), &before);
        assert_eq!(display.text(TextRegion::Weather), Some("72F, Cloudy, 9MPH"));
    }

    #[test]
    fn test_long_conditions_are_truncated() {
        let mut weather = service();
        let mut display = RecordingDisplay::new();
        let long = "Scattered thunderstorms with heavy rain";

        weather.inbox_received(&message(&[Tuple::cstring(1, long)]), &mut display);

        assert_eq!(weather.reading().conditions.as_str(), &long[..CONDITIONS_CAPACITY]);
        assert!(weather.summary().len() <= WEATHER_SUMMARY_CAPACITY);
    }

    #[test]
    fn test_mistyped_temperature_is_skipped() {
        let mut weather = service();
        let mut display = RecordingDisplay::new();

        weather.inbox_received(&message(&[Tuple::int32(0, 50)]), &mut display);
        weather.inbox_received(&message(&[Tuple::cstring(0, "hot")]), &mut display);

        assert_eq!(weather.reading().temperature.as_str(), "50F");
    }

    #[test]
    fn test_narrow_unsigned_values_are_accepted() {
        let mut weather = service();
        let mut display = RecordingDisplay::new();

        weather.inbox_received(&message(&[Tuple::uint8(2, 7)]), &mut display);

        assert_eq!(weather.reading().wind_speed.as_str(), "7MPH");
    }

    #[test]
    fn test_callbacks_return_to_idle_without_touching_fields() {
        let mut weather = service();
        let mut outbox = RecordingOutbox::default();
        let mut display = RecordingDisplay::new();
        weather.inbox_received(&weather_reply(72, "Cloudy", 9), &mut display);
        let before = weather.reading().clone();

        weather.request_weather(&mut outbox).unwrap();
        weather.outbox_sent(&outbox.sent[0]);
        assert_eq!(weather.state(), ExchangeState::Idle);

        weather.request_weather(&mut outbox).unwrap();
        weather.outbox_failed(&outbox.sent[1], AppMessageResult::SendTimeout);
        assert_eq!(weather.state(), ExchangeState::Idle);

        weather.request_weather(&mut outbox).unwrap();
        weather.inbox_dropped(AppMessageResult::BufferOverflow);
        assert_eq!(weather.state(), ExchangeState::Idle);

        assert_eq!(weather.reading(), &before);
    }
}
