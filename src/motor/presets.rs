use super::curve::ThrustCurve;
use super::source::ConstantThrust;

// ---------------------------------------------------------------------------
// Preset motors
// ---------------------------------------------------------------------------

/// Small black-powder class motor: sharp ignition spike, ~1.6 s sustain.
pub fn hobby_d12() -> ThrustCurve {
    ThrustCurve::from_table(
        "D12",
        vec![
            (0.000, 0.0),
            (0.050, 2.5),
            (0.150, 12.0),
            (0.250, 29.7),
            (0.300, 24.0),
            (0.400, 14.5),
            (0.600, 11.5),
            (1.000, 10.5),
            (1.400, 10.3),
            (1.600, 10.0),
            (1.650, 0.0),
        ],
    )
}

/// Flat bench-test motor used by the demo binary.
pub fn bench_constant() -> ConstantThrust {
    ConstantThrust::new(20.0, 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motor::ThrustSource;

    #[test]
    fn d12_has_expected_shape() {
        let m = hobby_d12();
        assert!((m.peak() - 29.7).abs() < 1e-12);
        assert!(m.total_impulse() > 15.0 && m.total_impulse() < 25.0);
        assert_eq!(m.thrust(2.0), 0.0);
    }
}
