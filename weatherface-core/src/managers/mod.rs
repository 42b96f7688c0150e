mod event_producer;
mod state_manager;
mod window_manager;

pub use event_producer::EventProducer;
pub use state_manager::StateManager;
pub use window_manager::{RegionLayout, WATCHFACE_LAYOUT, WindowManager};
