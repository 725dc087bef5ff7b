use nalgebra::Vector3;
use tracing::{debug, trace, warn};

use crate::command::Setpoint;
use crate::config::GimbalConfig;
use crate::error::GimbalError;
use crate::motor::ThrustSource;
use super::attitude::{attitude_from_direction, Orientation};
use super::geometry::{self, DEGREES_TO_RADIANS};

// ---------------------------------------------------------------------------
// Rate-limited two-axis TVC gimbal
// ---------------------------------------------------------------------------

/// Servo-driven thrust vector gimbal for one motor.
///
/// Current angles chase their targets at no more than `max_angular_rate`
/// per axis. Each axis moves at full rate while the remaining error exceeds
/// one tick of travel, then snaps exactly onto the target.
#[derive(Debug, Clone)]
pub struct GimbalController<S> {
    pitch: f64,                  // rad, deflection about body X
    yaw: f64,                    // rad, deflection about body Y
    target_pitch: f64,           // rad
    target_yaw: f64,             // rad
    max_angular_rate: f64,       // rad/s
    mount_offset: Vector3<f64>,  // pivot, body frame, m
    thrust_source: S,
}

impl<S: ThrustSource> GimbalController<S> {
    /// Create a centered gimbal. `max_refresh_speed` is in deg/s.
    pub fn new(thrust_source: S, max_refresh_speed: f64) -> Result<Self, GimbalError> {
        if !(max_refresh_speed.is_finite() && max_refresh_speed > 0.0) {
            return Err(GimbalError::InvalidRate(max_refresh_speed));
        }
        let max_angular_rate = max_refresh_speed * DEGREES_TO_RADIANS;
        debug!(max_refresh_speed, max_angular_rate, "gimbal created");
        Ok(Self {
            pitch: 0.0,
            yaw: 0.0,
            target_pitch: 0.0,
            target_yaw: 0.0,
            max_angular_rate,
            mount_offset: Vector3::zeros(),
            thrust_source,
        })
    }

    /// Create from a config, already settled at its initial setpoint.
    pub fn from_config(thrust_source: S, config: &GimbalConfig) -> Result<Self, GimbalError> {
        config.validate()?;
        let mut gimbal = Self::new(thrust_source, config.max_refresh_speed_deg)?;
        gimbal.move_to_motor(config.mount_offset);
        gimbal.update_setpoint(config.initial_setpoint.pitch, config.initial_setpoint.yaw);
        gimbal.force_to_target();
        Ok(gimbal)
    }

    /// Slew both axes toward their targets over `dt` seconds.
    pub fn step(&mut self, dt: f64) -> Result<(), GimbalError> {
        if dt.is_nan() || dt.is_infinite() {
            warn!(dt, "rejected non-finite gimbal timestep");
            return Err(GimbalError::NonFiniteTimestep(dt));
        }
        if dt < 0.0 {
            warn!(dt, "rejected negative gimbal timestep");
            return Err(GimbalError::NegativeTimestep(dt));
        }
        let limit = self.max_angular_rate * dt;
        self.pitch = slew(self.pitch, self.target_pitch, limit);
        self.yaw = slew(self.yaw, self.target_yaw, limit);
        trace!(pitch = self.pitch, yaw = self.yaw, "gimbal step");
        Ok(())
    }

    /// Command new target angles (rad). Takes effect on the next `step`.
    pub fn update_setpoint(&mut self, target_pitch: f64, target_yaw: f64) {
        trace!(target_pitch, target_yaw, "gimbal setpoint");
        self.target_pitch = target_pitch;
        self.target_yaw = target_yaw;
    }

    /// Relocate the gimbal pivot in the body frame (m).
    pub fn move_to_motor(&mut self, offset: Vector3<f64>) {
        debug!(x = offset.x, y = offset.y, z = offset.z, "gimbal mount moved");
        self.mount_offset = offset;
    }

    /// Jump straight to the targets, ignoring the rate limit.
    ///
    /// Meant for initialization only.
    pub fn force_to_target(&mut self) {
        self.pitch = self.target_pitch;
        self.yaw = self.target_yaw;
    }

    /// Force and torque (body frame) at time `t` about `center_of_mass`.
    pub fn thrust_vector(&self, t: f64, center_of_mass: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
        let force = self.thrust_direction() * self.thrust_source.thrust(t);
        let torque = geometry::torque_about(&self.mount_offset, center_of_mass, &force);
        (force, torque)
    }

    /// Rotation from the reversed nominal axis `(0, 0, -1)` to the reversed
    /// thrust direction.
    ///
    /// Zero deflection reports identity; a fully reversed thrust axis reports
    /// a half turn about +X. Deflections below ~1e-8 rad read as zero angle.
    pub fn attitude<O: Orientation>(&self) -> O {
        attitude_from_direction(&-self.thrust_direction())
    }

    /// Unit thrust direction for the current angles.
    pub fn thrust_direction(&self) -> Vector3<f64> {
        geometry::thrust_direction(self.pitch, self.yaw)
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn angles(&self) -> Setpoint {
        Setpoint { pitch: self.pitch, yaw: self.yaw }
    }

    pub fn target(&self) -> Setpoint {
        Setpoint { pitch: self.target_pitch, yaw: self.target_yaw }
    }

    /// Slew limit, rad/s.
    pub fn max_angular_rate(&self) -> f64 {
        self.max_angular_rate
    }

    pub fn mount_offset(&self) -> &Vector3<f64> {
        &self.mount_offset
    }

    pub fn thrust_source(&self) -> &S {
        &self.thrust_source
    }

    pub fn is_settled(&self) -> bool {
        self.pitch == self.target_pitch && self.yaw == self.target_yaw
    }

    /// Time (s) the slower axis still needs to reach its target.
    pub fn time_to_settle(&self) -> f64 {
        let err = (self.target_pitch - self.pitch)
            .abs()
            .max((self.target_yaw - self.yaw).abs());
        err / self.max_angular_rate
    }
}

/// One rate-limited move of `current` toward `target`.
fn slew(current: f64, target: f64, limit: f64) -> f64 {
    let error = target - current;
    if error.abs() > limit {
        current + error.signum() * limit
    } else {
        target
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
