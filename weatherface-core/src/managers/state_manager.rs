use weatherface_common::*;

use crate::managers::WindowManager;
use crate::services::{clock_service::ClockService, weather_service::WeatherService};

/// Owns everything the watchface mutates and dispatches each event to the
/// service that handles it, one at a time.
pub struct StateManager<'a, P: PlatformTrait> {
    event_channel: WatchChannelReceiver<'a, SystemEvent>,
    display: P::DisplayDevice,
    outbox: P::OutboxDevice,
    clock: P::ClockDevice,
    window: WindowManager,
    clock_service: ClockService,
    weather_service: WeatherService,
    running: bool,
}

impl<'a, P: PlatformTrait> StateManager<'a, P> {
    pub fn new(
        event_receiver: WatchChannelReceiver<'a, SystemEvent>,
        ctx: PlatformContext<P>,
        config: WatchfaceConfig,
    ) -> Self {
        Self {
            event_channel: event_receiver,
            display: ctx.display,
            outbox: ctx.outbox,
            clock: ctx.clock,
            window: WindowManager::new(),
            clock_service: ClockService::new(),
            weather_service: WeatherService::new(config),
            running: false,
        }
    }

    /// Loads the window, shows the current time and opens the message
    /// channel.
    pub fn initialize(&mut self) -> SystemResult<()> {
        info!("Initializing state manager");

        self.window.load(&mut self.display)?;

        let now = self.clock.now();
        let use_24h = self.clock.is_24h_style();
        self.clock_service.update_time(&now, use_24h, &mut self.display);

        let inbox_size = self.outbox.inbox_size_maximum();
        let outbox_size = self.outbox.outbox_size_maximum();
        match self.outbox.open(inbox_size, outbox_size) {
            Ok(()) => info!("App message opened (inbox {}B, outbox {}B)", inbox_size, outbox_size),
            Err(e) => error!("Failed to open app message: {:?}", e),
        }

        self.running = true;
        Ok(())
    }

    pub fn stop(&mut self) -> SystemResult<()> {
        info!("Stopping state manager");
        self.running = false;
        self.window.unload(&mut self.display)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn handle_event(&mut self, event: SystemEvent) -> SystemResult<()> {
        match event {
            SystemEvent::TimeEvent(evt) => self.handle_time_event(evt),
            SystemEvent::MessageEvent(evt) => self.handle_message_event(evt),
            SystemEvent::WindowEvent(evt) => self.handle_window_event(evt)?,
        }

        Ok(())
    }

    pub async fn wait_for_event(&mut self) -> SystemEvent {
        self.event_channel.receive().await
    }

    /// Dispatches every queued event without waiting. Returns how many were
    /// handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_channel.try_receive() {
            if let Err(e) = self.handle_event(event) {
                error!("Failed to handle event: {:?}", e);
            }
            handled += 1;
        }
        handled
    }

    fn handle_time_event(&mut self, event: TimeEvent) {
        match event {
            TimeEvent::MinuteTick {
                time,
                units_changed,
            } => {
                debug!("Minute tick {:?} (units {:#08b})", time, units_changed.bits());
                let use_24h = self.clock.is_24h_style();
                self.clock_service.update_time(&time, use_24h, &mut self.display);
                self.weather_service.on_tick(&time, &mut self.outbox);
            }
        }
    }

    fn handle_message_event(&mut self, event: MessageEvent) {
        match event {
            MessageEvent::InboxReceived(message) => {
                debug!("Inbox received {} tuples", message.len());
                self.weather_service.inbox_received(&message, &mut self.display);
            }
            MessageEvent::InboxDropped(reason) => self.weather_service.inbox_dropped(reason),
            MessageEvent::OutboxSent(message) => self.weather_service.outbox_sent(&message),
            MessageEvent::OutboxFailed(message, reason) => {
                self.weather_service.outbox_failed(&message, reason)
            }
        }
    }

    fn handle_window_event(&mut self, event: WindowEvent) -> SystemResult<()> {
        match event {
            WindowEvent::Load => self.window.load(&mut self.display),
            WindowEvent::Unload => self.stop(),
        }
    }

    pub fn clock_face(&self) -> &ClockFace {
        self.clock_service.face()
    }

    pub fn weather(&self) -> &WeatherService {
        &self.weather_service
    }

    pub fn display(&self) -> &P::DisplayDevice {
        &self.display
    }

    pub fn outbox(&self) -> &P::OutboxDevice {
        &self.outbox
    }

    pub fn outbox_mut(&mut self) -> &mut P::OutboxDevice {
        &mut self.outbox
    }
}
