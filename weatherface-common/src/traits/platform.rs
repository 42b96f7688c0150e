use crate::traits::{AppMessageOutbox, TextDisplay, WallClock};

/// 平台初始化后交给核心的设备集合
pub struct PlatformContext<P: PlatformTrait> {
    pub display: P::DisplayDevice,
    pub outbox: P::OutboxDevice,
    pub clock: P::ClockDevice,
}

pub trait PlatformTrait: Sized {
    type DisplayDevice: TextDisplay;

    type OutboxDevice: AppMessageOutbox;

    type ClockDevice: WallClock;

    /// Initialize the logger (optional)
    fn init_logger() {}

    /// 初始化平台设备
    fn init() -> impl core::future::Future<Output = PlatformContext<Self>>;

    /// Resets the MCU/CPU
    fn sys_reset();

    /// Stop the MCU/CPU
    fn sys_stop();
}
