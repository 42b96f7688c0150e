pub mod async_types;
pub mod config;
pub mod display;
pub mod error;
pub mod message;
pub mod text;
pub mod time;
pub mod weather;

pub use async_types::*;
pub use config::*;
pub use display::*;
pub use error::*;
pub use message::*;
pub use text::*;
pub use time::*;
pub use weather::*;
