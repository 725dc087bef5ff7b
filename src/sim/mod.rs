pub mod sample;
pub mod runner;
pub mod event;

pub use sample::GimbalSample;
pub use runner::{simulate, simulate_with};
pub use event::{EventDetector, EventKind, SimEvent};
