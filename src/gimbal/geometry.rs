use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Gimbal deflection geometry (actuator local frame)
// ---------------------------------------------------------------------------

pub const DEGREES_TO_RADIANS: f64 = std::f64::consts::PI / 180.0;
pub const RADIANS_TO_DEGREES: f64 = 180.0 / std::f64::consts::PI;

/// Thrust direction for a pitch (about x) and yaw (about y) deflection.
///
/// Yaw tips the +Z axis into the x-z plane, pitch into the y-z plane:
/// `(sin(yaw), -sin(pitch) cos(yaw), cos(pitch) cos(yaw))`.
/// Unit length for any pair of angles.
pub fn thrust_direction(pitch: f64, yaw: f64) -> Vector3<f64> {
    let (sx, cx) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();
    Vector3::new(sy, -sx * cy, cx * cy)
}

/// Torque produced by `force` applied at `point` about `center`.
pub fn torque_about(point: &Vector3<f64>, center: &Vector3<f64>, force: &Vector3<f64>) -> Vector3<f64> {
    let lever_arm = point - center;
    lever_arm.cross(force)
}
