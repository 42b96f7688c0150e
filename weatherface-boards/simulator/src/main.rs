use embassy_executor::Spawner;
use embassy_futures::select::{Either3, select3};
use jiff::Timestamp;
use simulated_rtc::SimulatedRtc;
use static_cell::StaticCell;
use weatherface_common::*;
use weatherface_core::main_task;
use weatherface_core::managers::EventProducer;

mod drivers;

use drivers::{CompanionLink, ConsoleDisplay, SimulatedCompanion, SimulatorOutbox};

/// Seconds before a request minute the simulated clock starts at.
const START_LEAD_SECS: i64 = 10;

static EVENT_CHANNEL: WatchChannel<SystemEvent> = WatchChannel::new();
static COMPANION_LINK: CompanionLink = CompanionLink::new();
static RTC: StaticCell<SimulatedRtc> = StaticCell::new();

pub struct Platform;

impl PlatformTrait for Platform {
    type DisplayDevice = ConsoleDisplay;

    type OutboxDevice = SimulatorOutbox;

    type ClockDevice = &'static SimulatedRtc;

    async fn init() -> PlatformContext<Self> {
        let rtc: &'static SimulatedRtc = RTC.init(SimulatedRtc::new());
        if let Some(start) = next_request_start(rtc.timestamp()) {
            rtc.set_time(start);
        }

        PlatformContext {
            display: ConsoleDisplay::new(),
            outbox: SimulatorOutbox::new(&COMPANION_LINK),
            clock: rtc,
        }
    }

    fn sys_reset() {
        info!("Simulator platform reset");
    }

    fn sys_stop() {
        info!("Simulator platform stop");
    }

    fn init_logger() {
        env_logger::init();
    }
}

/// A few seconds before the next half hour, so the first tick of the
/// simulation asks the phone for weather.
fn next_request_start(now: Timestamp) -> Option<Timestamp> {
    let interval = WEATHER_REQUEST_INTERVAL_MINUTES as i64 * 60;
    let next = (now.as_second() / interval + 1) * interval;
    Timestamp::from_second(next - START_LEAD_SECS).ok()
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    Platform::init_logger();

    let ctx = Platform::init().await;
    let clock = ctx.clock;

    let mut producer = EventProducer::starting_at(clock.now());
    let mut companion = SimulatedCompanion::new(&COMPANION_LINK, EVENT_CHANNEL.sender());

    let watchface = main_task::<Platform>(ctx, EVENT_CHANNEL.receiver(), WatchfaceConfig::default());
    let ticks = producer.start_minute_timer(clock, EVENT_CHANNEL.sender());

    match select3(watchface, ticks, companion.run()).await {
        Either3::First(Ok(())) => Platform::sys_stop(),
        Either3::First(Err(e)) => {
            error!("Main task error: {:?}", e);
            Platform::sys_reset();
        }
        Either3::Second(()) | Either3::Third(()) => {
            warn!("Background task exited");
        }
    }
}
