pub mod source;
pub mod curve;
pub mod presets;

pub use source::{ConstantThrust, ThrustFn, ThrustSource};
pub use curve::ThrustCurve;
