use nalgebra::Vector3;

use crate::command::Setpoint;

/// Gimbal state and output recorded at one tick.
#[derive(Debug, Clone)]
pub struct GimbalSample {
    pub time: f64,                  // s
    pub angles: Setpoint,           // rad, current deflection
    pub target: Setpoint,           // rad, commanded deflection
    pub thrust: f64,                // N, source magnitude
    pub force: Vector3<f64>,        // N, body frame
    pub torque: Vector3<f64>,       // N·m, body frame, about CG
    pub center_of_mass: Vector3<f64>,
}

impl GimbalSample {
    pub fn is_settled(&self) -> bool {
        self.angles == self.target
    }

    /// True when this sample is at rest on its target and got there by
    /// moving since `prev` (including a sub-tick step onto a new target).
    pub fn came_to_rest(&self, prev: &GimbalSample) -> bool {
        self.is_settled() && (!prev.is_settled() || self.angles != prev.angles)
    }

    /// Largest per-axis tracking error, rad.
    pub fn tracking_error(&self) -> f64 {
        (self.target.pitch - self.angles.pitch)
            .abs()
            .max((self.target.yaw - self.angles.yaw).abs())
    }
}
