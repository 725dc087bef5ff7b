// ---------------------------------------------------------------------------
// Gimbal setpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Setpoint {
    pub pitch: f64,   // rad, deflection about body X
    pub yaw: f64,     // rad, deflection about body Y
}

impl Setpoint {
    pub fn new(pitch: f64, yaw: f64) -> Self {
        Self { pitch, yaw }
    }

    /// Construct from angles in degrees.
    pub fn from_degrees(pitch_deg: f64, yaw_deg: f64) -> Self {
        Self { pitch: pitch_deg.to_radians(), yaw: yaw_deg.to_radians() }
    }
}
