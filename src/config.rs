use nalgebra::Vector3;

use crate::command::Setpoint;
use crate::error::GimbalError;

// ---------------------------------------------------------------------------
// Gimbal configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct GimbalConfig {
    pub max_refresh_speed_deg: f64,  // servo slew limit, deg/s
    pub mount_offset: Vector3<f64>,  // pivot position, body frame, m
    pub initial_setpoint: Setpoint,  // rad, applied with force_to_target
}

impl Default for GimbalConfig {
    fn default() -> Self {
        Self {
            max_refresh_speed_deg: 270.0,
            mount_offset: Vector3::zeros(),
            initial_setpoint: Setpoint::default(),
        }
    }
}

impl GimbalConfig {
    pub fn validate(&self) -> Result<(), GimbalError> {
        if !(self.max_refresh_speed_deg.is_finite() && self.max_refresh_speed_deg > 0.0) {
            return Err(GimbalError::InvalidRate(self.max_refresh_speed_deg));
        }
        if !self.mount_offset.iter().all(|c| c.is_finite()) {
            return Err(GimbalError::InvalidConfig {
                field: "mount_offset",
                message: "components must be finite".into(),
            });
        }
        if !(self.initial_setpoint.pitch.is_finite() && self.initial_setpoint.yaw.is_finite()) {
            return Err(GimbalError::InvalidConfig {
                field: "initial_setpoint",
                message: "angles must be finite".into(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Gimbal config builder
// ---------------------------------------------------------------------------

pub struct GimbalConfigBuilder {
    config: GimbalConfig,
}

impl GimbalConfigBuilder {
    pub fn new() -> Self {
        Self { config: GimbalConfig::default() }
    }

    pub fn max_refresh_speed_deg(mut self, v: f64) -> Self { self.config.max_refresh_speed_deg = v; self }
    pub fn mount_offset(mut self, v: Vector3<f64>) -> Self { self.config.mount_offset = v; self }
    pub fn initial_setpoint(mut self, pitch: f64, yaw: f64) -> Self {
        self.config.initial_setpoint = Setpoint { pitch, yaw };
        self
    }

    pub fn build(self) -> Result<GimbalConfig, GimbalError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for GimbalConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,
    pub max_time: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.001,      // 1 kHz, well below servo slew granularity
            max_time: 5.0,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), GimbalError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(GimbalError::InvalidConfig {
                field: "dt",
                message: format!("{} (must be finite and > 0)", self.dt),
            });
        }
        if !(self.max_time.is_finite() && self.max_time >= 0.0) {
            return Err(GimbalError::InvalidConfig {
                field: "max_time",
                message: format!("{} (must be finite and >= 0)", self.max_time),
            });
        }
        Ok(())
    }

    /// Number of ticks a run performs.
    pub fn steps(&self) -> usize {
        (self.max_time / self.dt).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GimbalConfig::default().validate().is_ok());
        assert!(SimConfig::default().validate().is_ok());
        assert_eq!(SimConfig::default().steps(), 5000);
    }

    #[test]
    fn builder_rejects_zero_rate() {
        let err = GimbalConfigBuilder::new().max_refresh_speed_deg(0.0).build();
        assert_eq!(err.unwrap_err(), GimbalError::InvalidRate(0.0));
    }

    #[test]
    fn builder_sets_fields() {
        let cfg = GimbalConfigBuilder::new()
            .max_refresh_speed_deg(90.0)
            .mount_offset(Vector3::new(0.0, 0.0, -0.5))
            .initial_setpoint(0.02, -0.01)
            .build()
            .unwrap();
        assert_eq!(cfg.max_refresh_speed_deg, 90.0);
        assert_eq!(cfg.mount_offset.z, -0.5);
        assert_eq!(cfg.initial_setpoint, Setpoint { pitch: 0.02, yaw: -0.01 });
    }

    #[test]
    fn sim_config_rejects_bad_dt() {
        let cfg = SimConfig { dt: 0.0, max_time: 1.0 };
        assert!(matches!(cfg.validate(), Err(GimbalError::InvalidConfig { field: "dt", .. })));
        let cfg = SimConfig { dt: 0.01, max_time: f64::NAN };
        assert!(cfg.validate().is_err());
    }
}
