use super::sample::GimbalSample;

// ---------------------------------------------------------------------------
// Simulation events
// ---------------------------------------------------------------------------

/// Kinds of simulation events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Both axes reached their targets after moving.
    Settled,
    /// A new target lies more than one tick of travel away.
    Saturated,
    /// Thrust dropped to zero after having been positive.
    Burnout,
}

/// A discrete event that occurred during simulation.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub sample: GimbalSample,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive samples and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &GimbalSample, current: &GimbalSample) -> Option<EventKind>;
}

/// Detects the tick on which the gimbal comes to rest on its target.
pub struct SettleDetector;

impl EventDetector for SettleDetector {
    fn check(&mut self, prev: &GimbalSample, current: &GimbalSample) -> Option<EventKind> {
        if current.came_to_rest(prev) {
            Some(EventKind::Settled)
        } else {
            None
        }
    }
}

/// Detects a step in the command the servo cannot follow within one tick.
pub struct SaturationDetector {
    pub max_angular_rate: f64, // rad/s
}

impl EventDetector for SaturationDetector {
    fn check(&mut self, prev: &GimbalSample, current: &GimbalSample) -> Option<EventKind> {
        let dt = current.time - prev.time;
        let new_target = current.target != prev.target;
        if new_target && !current.is_settled() && dt > 0.0 {
            let travel = self.max_angular_rate * dt;
            let moved = (current.angles.pitch - prev.angles.pitch)
                .abs()
                .max((current.angles.yaw - prev.angles.yaw).abs());
            if moved >= travel * (1.0 - 1e-9) {
                return Some(EventKind::Saturated);
            }
        }
        None
    }
}

/// Detects motor burnout.
#[derive(Default)]
pub struct BurnoutDetector {
    fired: bool,
}

impl BurnoutDetector {
    pub fn new() -> Self {
        Self { fired: false }
    }
}

impl EventDetector for BurnoutDetector {
    fn check(&mut self, prev: &GimbalSample, current: &GimbalSample) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if prev.thrust > 0.0 && current.thrust <= 0.0 {
            self.fired = true;
            Some(EventKind::Burnout)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Setpoint;
    use nalgebra::Vector3;

    fn make_sample(time: f64, angle: f64, target: f64, thrust: f64) -> GimbalSample {
        GimbalSample {
            time,
            angles: Setpoint::new(angle, 0.0),
            target: Setpoint::new(target, 0.0),
            thrust,
            force: Vector3::new(0.0, 0.0, thrust),
            torque: Vector3::zeros(),
            center_of_mass: Vector3::zeros(),
        }
    }

    #[test]
    fn settle_detected() {
        let mut det = SettleDetector;
        let prev = make_sample(0.0, 0.05, 0.1, 10.0);
        let curr = make_sample(0.01, 0.1, 0.1, 10.0);
        assert_eq!(det.check(&prev, &curr), Some(EventKind::Settled));
        assert_eq!(det.check(&curr, &curr), None);
    }

    #[test]
    fn settle_detected_after_sub_tick_move() {
        let mut det = SettleDetector;
        let prev = make_sample(0.0, 0.0, 0.0, 10.0);
        let curr = make_sample(0.01, 0.02, 0.02, 10.0);
        assert_eq!(det.check(&prev, &curr), Some(EventKind::Settled));
    }

    #[test]
    fn saturation_detected_on_large_step() {
        let mut det = SaturationDetector { max_angular_rate: 1.0 };
        let prev = make_sample(0.0, 0.0, 0.0, 10.0);
        let curr = make_sample(0.01, 0.01, 0.5, 10.0);
        assert_eq!(det.check(&prev, &curr), Some(EventKind::Saturated));
        // Small step that the servo covers within the tick.
        let curr = make_sample(0.01, 0.005, 0.005, 10.0);
        assert_eq!(det.check(&prev, &curr), None);
    }

    #[test]
    fn burnout_fires_once() {
        let mut det = BurnoutDetector::new();
        let burning = make_sample(1.0, 0.0, 0.0, 5.0);
        let out = make_sample(1.01, 0.0, 0.0, 0.0);
        assert_eq!(det.check(&burning, &out), Some(EventKind::Burnout));
        assert!(det.check(&burning, &out).is_none());
    }
}
