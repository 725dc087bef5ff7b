use super::setpoint::Setpoint;

/// Source of gimbal setpoints over time.
///
/// Implement this to plug a custom command profile (or an outer attitude
/// loop) into the simulation runner.
pub trait Commander {
    /// Setpoint to apply at simulation time `time` (s).
    fn command(&mut self, time: f64) -> Setpoint;

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}
