pub mod setpoint;
pub mod commander;
pub mod profiles;

pub use setpoint::Setpoint;
pub use commander::Commander;
pub use profiles::{Hold, SineSweep, StepSchedule};
