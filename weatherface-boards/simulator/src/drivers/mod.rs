mod companion;
mod display;

pub use companion::{CompanionLink, SimulatedCompanion, SimulatorOutbox};
pub use display::ConsoleDisplay;
