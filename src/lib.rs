pub mod error;
pub mod config;
pub mod gimbal;
pub mod motor;
pub mod command;
pub mod sim;
pub mod io;

pub use error::GimbalError;
pub use config::{GimbalConfig, GimbalConfigBuilder, SimConfig};
pub use gimbal::{GimbalController, Orientation};
pub use motor::ThrustSource;
pub use command::{Commander, Setpoint};

