use nalgebra::{Rotation3, Unit, UnitQuaternion, Vector3};

// ---------------------------------------------------------------------------
// Orientation construction from an axis-angle pair
// ---------------------------------------------------------------------------

/// A rotation type the gimbal can report its attitude in.
///
/// `axis` is always non-zero when called from [`attitude_from_direction`].
pub trait Orientation: Sized {
    fn from_axis_angle(axis: &Vector3<f64>, angle: f64) -> Self;

    fn identity() -> Self;
}

impl Orientation for UnitQuaternion<f64> {
    fn from_axis_angle(axis: &Vector3<f64>, angle: f64) -> Self {
        UnitQuaternion::from_axis_angle(&Unit::new_normalize(*axis), angle)
    }

    fn identity() -> Self {
        UnitQuaternion::identity()
    }
}

impl Orientation for Rotation3<f64> {
    fn from_axis_angle(axis: &Vector3<f64>, angle: f64) -> Self {
        Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle)
    }

    fn identity() -> Self {
        Rotation3::identity()
    }
}

/// Below this cross-product norm the reference and deflected axes are
/// treated as parallel.
pub const PARALLEL_EPS: f64 = 1e-12;

/// Reference axis the attitude is measured from.
pub fn attitude_reference() -> Vector3<f64> {
    Vector3::new(0.0, 0.0, -1.0)
}

/// Rotation carrying [`attitude_reference`] onto `direction` (unit vector).
///
/// Parallel case returns identity; antiparallel returns a half turn about
/// body +X, which is perpendicular to the reference axis.
///
/// Precision degrades near zero deflection: below roughly 1e-8 rad the dot
/// product rounds to 1 and the reported angle is 0 even though the axis is
/// still non-zero.
pub fn attitude_from_direction<O: Orientation>(direction: &Vector3<f64>) -> O {
    let z_ref = attitude_reference();
    let cos_angle = z_ref.dot(direction).clamp(-1.0, 1.0);
    let angle = cos_angle.acos();
    let axis = z_ref.cross(direction);

    if axis.norm() < PARALLEL_EPS {
        if cos_angle > 0.0 {
            return O::identity();
        }
        tracing::warn!("thrust axis fully reversed, reporting half turn about +X");
        return O::from_axis_angle(&Vector3::x(), std::f64::consts::PI);
    }

    O::from_axis_angle(&axis, angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_gives_identity() {
        let q: UnitQuaternion<f64> = attitude_from_direction(&attitude_reference());
        assert!(q.angle().abs() < 1e-15);
    }

    #[test]
    fn antiparallel_gives_half_turn() {
        let q: UnitQuaternion<f64> = attitude_from_direction(&Vector3::z());
        assert!((q.angle() - std::f64::consts::PI).abs() < 1e-12);
        let mapped = q * attitude_reference();
        assert!((mapped - Vector3::z()).norm() < 1e-12);
    }

    #[test]
    fn rotation_maps_reference_onto_direction() {
        let dir = Vector3::new(0.2, -0.3, -0.9).normalize();
        let q: UnitQuaternion<f64> = attitude_from_direction(&dir);
        let mapped = q * attitude_reference();
        assert!((mapped - dir).norm() < 1e-12);
    }

    #[test]
    fn rotation3_agrees_with_quaternion() {
        let dir = Vector3::new(-0.1, 0.4, -0.8).normalize();
        let q: UnitQuaternion<f64> = attitude_from_direction(&dir);
        let r: Rotation3<f64> = attitude_from_direction(&dir);
        assert!((q.to_rotation_matrix().matrix() - r.matrix()).norm() < 1e-12);
    }

    #[test]
    fn tiny_deflection_reads_as_zero_angle() {
        let dir = Vector3::new(0.0, 1e-9, -1.0).normalize();
        let q: UnitQuaternion<f64> = attitude_from_direction(&dir);
        assert!(q.angle().is_finite());
        assert!(q.angle() < 1e-8);
    }

    #[test]
    fn drift_outside_unit_range_is_clamped() {
        // Slightly over-long vector pushes the dot product past -1 / +1.
        let dir = Vector3::new(0.0, 0.0, -1.0 - 1e-13);
        let q: UnitQuaternion<f64> = attitude_from_direction(&dir);
        assert!(q.angle().is_finite());
        let dir = Vector3::new(0.0, 0.0, 1.0 + 1e-13);
        let q: UnitQuaternion<f64> = attitude_from_direction(&dir);
        assert!(q.angle().is_finite());
    }
}
