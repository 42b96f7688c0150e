pub mod app_message;
pub mod clock;
pub mod platform;
pub mod text_display;

pub use app_message::*;
pub use clock::*;
pub use platform::*;
pub use text_display::*;
