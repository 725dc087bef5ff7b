use crate::error::GimbalError;
use super::source::ThrustSource;

// ---------------------------------------------------------------------------
// Tabulated thrust curve
// ---------------------------------------------------------------------------

/// Thrust-vs-time table, linearly interpolated between samples.
///
/// Zero before the first sample and after the last one, so a curve that
/// does not end at zero thrust cuts off sharply at its final sample.
#[derive(Debug, Clone)]
pub struct ThrustCurve {
    pub name: String,
    points: Vec<(f64, f64)>, // (s, N)
}

impl ThrustCurve {
    /// Build a curve from `(time, thrust)` samples.
    ///
    /// Times must be finite and strictly increasing; thrust finite and >= 0.
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Result<Self, GimbalError> {
        if points.is_empty() {
            return Err(GimbalError::InvalidThrustCurve("no samples".into()));
        }
        for (i, &(t, f)) in points.iter().enumerate() {
            if !t.is_finite() || !f.is_finite() {
                return Err(GimbalError::InvalidThrustCurve(format!(
                    "non-finite sample at index {i}"
                )));
            }
            if f < 0.0 {
                return Err(GimbalError::InvalidThrustCurve(format!(
                    "negative thrust {f} N at t={t} s"
                )));
            }
        }
        if let Some(w) = points.windows(2).find(|w| w[1].0 <= w[0].0) {
            return Err(GimbalError::InvalidThrustCurve(format!(
                "times not increasing: {} s then {} s",
                w[0].0, w[1].0
            )));
        }
        Ok(Self { name: name.into(), points })
    }

    /// Trusted tables (presets) skip validation.
    pub(crate) fn from_table(name: &str, points: Vec<(f64, f64)>) -> Self {
        debug_assert!(!points.is_empty());
        Self { name: name.into(), points }
    }

    /// Peak thrust over the table (N).
    pub fn peak(&self) -> f64 {
        self.points.iter().map(|p| p.1).fold(0.0_f64, f64::max)
    }

    /// Total impulse (N·s), trapezoidal.
    pub fn total_impulse(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| 0.5 * (w[0].1 + w[1].1) * (w[1].0 - w[0].0))
            .sum()
    }
}

impl ThrustSource for ThrustCurve {
    fn thrust(&self, t: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if t < first.0 || t > last.0 {
            return 0.0;
        }
        // First sample with time >= t
        let idx = self.points.partition_point(|p| p.0 < t);
        if idx == 0 {
            return first.1;
        }
        let (t0, f0) = self.points[idx - 1];
        let (t1, f1) = self.points[idx];
        let frac = (t - t0) / (t1 - t0);
        f0 + frac * (f1 - f0)
    }

    fn burn_time(&self) -> Option<f64> {
        self.points.last().map(|p| p.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> ThrustCurve {
        ThrustCurve::new("ramp", vec![(0.0, 0.0), (1.0, 10.0), (3.0, 10.0), (4.0, 0.0)]).unwrap()
    }

    #[test]
    fn interpolates_between_samples() {
        let c = ramp();
        assert!((c.thrust(0.5) - 5.0).abs() < 1e-12);
        assert!((c.thrust(2.0) - 10.0).abs() < 1e-12);
        assert!((c.thrust(3.25) - 7.5).abs() < 1e-12);
        assert!((c.thrust(1.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn zero_outside_burn() {
        let c = ramp();
        assert_eq!(c.thrust(-1.0), 0.0);
        assert_eq!(c.thrust(4.5), 0.0);
        assert_eq!(c.burn_time(), Some(4.0));
    }

    #[test]
    fn impulse_and_peak() {
        let c = ramp();
        assert!((c.total_impulse() - 30.0).abs() < 1e-12);
        assert!((c.peak() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_tables() {
        assert!(matches!(
            ThrustCurve::new("empty", vec![]),
            Err(GimbalError::InvalidThrustCurve(_))
        ));
        assert!(ThrustCurve::new("back", vec![(0.0, 1.0), (0.0, 2.0)]).is_err());
        assert!(ThrustCurve::new("neg", vec![(0.0, -1.0)]).is_err());
        assert!(ThrustCurve::new("nan", vec![(f64::NAN, 1.0)]).is_err());
    }
}
