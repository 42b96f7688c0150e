#![cfg_attr(not(test), no_std)]

pub mod managers;
pub mod services;

#[cfg(test)]
mod testing;

use weatherface_common::*;

use crate::managers::StateManager;

/// Runs the watchface until the window is unloaded.
pub async fn main_task<P: PlatformTrait>(
    ctx: PlatformContext<P>,
    receiver: WatchChannelReceiver<'_, SystemEvent>,
    config: WatchfaceConfig,
) -> SystemResult<()> {
    info!("weatherface starting...");

    let mut state_manager = StateManager::<P>::new(receiver, ctx, config);
    state_manager.initialize()?;

    info!("Main task started");

    while state_manager.is_running() {
        let event = state_manager.wait_for_event().await;
        debug!("Received event: {:?}", event);
        if let Err(e) = state_manager.handle_event(event) {
            error!("Failed to handle event: {:?}", e);
        }
    }

    info!("Main task stopped");
    Ok(())
}
