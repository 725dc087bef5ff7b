pub mod controller;
pub mod attitude;
pub mod geometry;

pub use controller::GimbalController;
pub use attitude::Orientation;
pub use geometry::{DEGREES_TO_RADIANS, RADIANS_TO_DEGREES};
