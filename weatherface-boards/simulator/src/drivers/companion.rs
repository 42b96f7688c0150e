use core::sync::atomic::{AtomicUsize, Ordering};

use embassy_sync::channel::Channel;
use embassy_time::{Duration, Timer};
use heapless::Vec;
use weatherface_common::*;

type EncodedMessage = Vec<u8, APP_MESSAGE_BUFFER_SIZE>;

/// Shared between the watch outbox and the simulated phone: encoded
/// requests heading to the phone, and the inbox size the watch opened.
pub struct CompanionLink {
    requests: Channel<WatchRawMutex, EncodedMessage, 1>,
    inbox_size: AtomicUsize,
}

impl CompanionLink {
    pub const fn new() -> Self {
        Self {
            requests: Channel::new(),
            inbox_size: AtomicUsize::new(0),
        }
    }

    /// Zero until the watch opens its inbox.
    pub fn inbox_size(&self) -> usize {
        self.inbox_size.load(Ordering::Relaxed)
    }
}

impl Default for CompanionLink {
    fn default() -> Self {
        Self::new()
    }
}

/// Outbox that encodes each message and hands the bytes to the simulated
/// phone. Only one message can be in flight, as on the real channel.
pub struct SimulatorOutbox {
    link: &'static CompanionLink,
    outbox_size: usize,
    opened: bool,
}

impl SimulatorOutbox {
    pub fn new(link: &'static CompanionLink) -> Self {
        Self {
            link,
            outbox_size: 0,
            opened: false,
        }
    }
}

impl AppMessageOutbox for SimulatorOutbox {
    fn inbox_size_maximum(&self) -> usize {
        APP_MESSAGE_BUFFER_SIZE
    }

    fn outbox_size_maximum(&self) -> usize {
        APP_MESSAGE_BUFFER_SIZE
    }

    fn open(&mut self, inbox_size: usize, outbox_size: usize) -> Result<(), AppMessageResult> {
        if self.opened {
            return Err(AppMessageResult::InvalidState);
        }
        self.link.inbox_size.store(inbox_size, Ordering::Relaxed);
        self.outbox_size = outbox_size;
        self.opened = true;
        info!("[Simulator AppMessage] Opened inbox {}B / outbox {}B", inbox_size, outbox_size);
        Ok(())
    }

    fn send(&mut self, message: &AppMessage) -> Result<(), AppMessageResult> {
        if !self.opened {
            return Err(AppMessageResult::InvalidState);
        }
        if message.encoded_len() > self.outbox_size {
            return Err(AppMessageResult::BufferOverflow);
        }
        let bytes = message
            .encode_to_vec()
            .map_err(|_| AppMessageResult::InvalidArgs)?;
        self.link
            .requests
            .try_send(bytes)
            .map_err(|_| AppMessageResult::Busy)?;
        debug!("[Simulator AppMessage] Queued {} bytes", message.encoded_len());
        Ok(())
    }
}

/// Canned weather the phone cycles through.
const FORECASTS: [(i32, &str, i32); 4] = [
    (72, "Clear", 5),
    (68, "Partly Cloudy", 9),
    (61, "Light Rain", 14),
    (57, "Thunderstorms", 22),
];

/// Phone-side half of the exchange: answers every request with a weather
/// reply encoded the same way the real companion would.
pub struct SimulatedCompanion<'a> {
    link: &'static CompanionLink,
    events: WatchChannelSender<'a, SystemEvent>,
    latency: Duration,
    replies: usize,
}

impl<'a> SimulatedCompanion<'a> {
    pub fn new(link: &'static CompanionLink, events: WatchChannelSender<'a, SystemEvent>) -> Self {
        Self {
            link,
            events,
            latency: Duration::from_millis(500),
            replies: 0,
        }
    }

    pub async fn run(&mut self) {
        info!("[Simulator Companion] Waiting for requests");
        loop {
            let request = self.link.requests.receive().await;
            Timer::after(self.latency).await;

            match AppMessage::decode(&request) {
                Ok(message) => {
                    self.events
                        .send(SystemEvent::MessageEvent(MessageEvent::OutboxSent(message)))
                        .await;
                }
                Err(e) => {
                    warn!("[Simulator Companion] Unreadable request: {}", e);
                    continue;
                }
            }

            Timer::after(self.latency).await;
            match self.build_reply().and_then(|reply| reply.encode_to_vec()) {
                Ok(bytes) => self.deliver(&bytes).await,
                Err(e) => error!("[Simulator Companion] Failed to build reply: {}", e),
            }
        }
    }

    fn build_reply(&mut self) -> Result<AppMessage, DictionaryError> {
        let (temperature, conditions, wind_speed) = FORECASTS[self.replies % FORECASTS.len()];
        self.replies += 1;

        AppMessage::new()
            .with(Tuple::int32(WeatherKey::Temperature as u32, temperature))
            .and_then(|m| m.with(Tuple::cstring(WeatherKey::Conditions as u32, conditions)))
            .and_then(|m| m.with(Tuple::int32(WeatherKey::WindSpeed as u32, wind_speed)))
            .map_err(|_| DictionaryError::TooManyTuples)
    }

    /// Hands encoded bytes to the watch inbox, dropping what it cannot read.
    async fn deliver(&self, bytes: &[u8]) {
        let inbox_size = self.link.inbox_size();
        let event = if inbox_size == 0 {
            MessageEvent::InboxDropped(AppMessageResult::NotConnected)
        } else if bytes.len() > inbox_size {
            MessageEvent::InboxDropped(AppMessageResult::BufferOverflow)
        } else {
            match AppMessage::decode(bytes) {
                Ok(message) => MessageEvent::InboxReceived(message),
                Err(e) => {
                    warn!("[Simulator Companion] Inbound dictionary rejected: {}", e);
                    MessageEvent::InboxDropped(AppMessageResult::InternalError)
                }
            }
        };
        self.events.send(SystemEvent::MessageEvent(event)).await;
    }
}
