use nalgebra::Vector3;
use tracing::{debug, info};

use crate::command::Commander;
use crate::config::SimConfig;
use crate::error::GimbalError;
use crate::gimbal::GimbalController;
use crate::motor::ThrustSource;
use super::event::{BurnoutDetector, EventDetector, SaturationDetector, SettleDetector, SimEvent};
use super::sample::GimbalSample;

// ---------------------------------------------------------------------------
// Fixed-step gimbal simulation
// ---------------------------------------------------------------------------

fn record<S: ThrustSource>(
    gimbal: &GimbalController<S>,
    time: f64,
    center_of_mass: Vector3<f64>,
) -> GimbalSample {
    let (force, torque) = gimbal.thrust_vector(time, &center_of_mass);
    GimbalSample {
        time,
        angles: gimbal.angles(),
        target: gimbal.target(),
        thrust: gimbal.thrust_source().thrust(time),
        force,
        torque,
        center_of_mass,
    }
}

/// Drive one gimbal with a commander and a moving center of mass.
///
/// The gimbal is first forced onto the t=0 command, then each tick applies
/// the command, slews by `dt` and records force/torque about `cg(t)`.
/// Returns the samples (t=0 included) and the detected events.
pub fn simulate_with<S, C, G>(
    gimbal: &mut GimbalController<S>,
    commander: &mut C,
    center_of_mass: G,
    config: &SimConfig,
    detectors: &mut [&mut dyn EventDetector],
) -> Result<(Vec<GimbalSample>, Vec<SimEvent>), GimbalError>
where
    S: ThrustSource,
    C: Commander + ?Sized,
    G: Fn(f64) -> Vector3<f64>,
{
    config.validate()?;
    let steps = config.steps();
    info!(commander = commander.name(), dt = config.dt, steps, "gimbal run started");

    let initial = commander.command(0.0);
    gimbal.update_setpoint(initial.pitch, initial.yaw);
    gimbal.force_to_target();

    let mut samples = Vec::with_capacity(steps.min(200_000) + 1);
    let mut events = Vec::new();
    samples.push(record(gimbal, 0.0, center_of_mass(0.0)));

    for i in 1..=steps {
        let prev_time = (i - 1) as f64 * config.dt;
        let time = i as f64 * config.dt;

        // Command sampled at the start of the tick, held over it
        let cmd = commander.command(prev_time);
        gimbal.update_setpoint(cmd.pitch, cmd.yaw);
        gimbal.step(config.dt)?;

        let sample = record(gimbal, time, center_of_mass(time));
        let prev = &samples[samples.len() - 1];
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(prev, &sample) {
                debug!(time, ?kind, "gimbal event");
                events.push(SimEvent { time, kind, sample: sample.clone() });
            }
        }
        samples.push(sample);
    }

    info!(samples = samples.len(), events = events.len(), "gimbal run finished");
    Ok((samples, events))
}

/// Simulate with a fixed center of mass and the standard detectors.
pub fn simulate<S, C>(
    gimbal: &mut GimbalController<S>,
    commander: &mut C,
    center_of_mass: Vector3<f64>,
    config: &SimConfig,
) -> Result<(Vec<GimbalSample>, Vec<SimEvent>), GimbalError>
where
    S: ThrustSource,
    C: Commander + ?Sized,
{
    let mut settle = SettleDetector;
    let mut saturation = SaturationDetector { max_angular_rate: gimbal.max_angular_rate() };
    let mut burnout = BurnoutDetector::new();
    let mut detectors: [&mut dyn EventDetector; 3] = [&mut settle, &mut saturation, &mut burnout];
    simulate_with(gimbal, commander, |_| center_of_mass, config, &mut detectors)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Hold, Setpoint, SineSweep, StepSchedule};
    use crate::motor::ConstantThrust;
    use crate::sim::event::EventKind;

    fn gimbal() -> GimbalController<ConstantThrust> {
        let mut g = GimbalController::new(ConstantThrust::new(20.0, 1.0), 270.0).unwrap();
        g.move_to_motor(Vector3::new(0.0, 0.0, -0.5));
        g.update_setpoint(0.3, 0.3); // discarded by the runner's initial force
        g
    }

    #[test]
    fn starts_settled_on_first_command() {
        let mut g = gimbal();
        let mut cmd = Hold(Setpoint::new(0.05, -0.02));
        let config = SimConfig { dt: 0.01, max_time: 0.1 };
        let (samples, events) = simulate(&mut g, &mut cmd, Vector3::zeros(), &config).unwrap();
        assert_eq!(samples.len(), 11);
        assert!(samples.iter().all(|s| s.is_settled()));
        assert!(events.is_empty());
    }

    #[test]
    fn step_command_settles_and_saturates() {
        let mut g = gimbal();
        let mut cmd = StepSchedule::new().at(0.1, Setpoint::new(0.1, 0.0));
        let config = SimConfig { dt: 0.01, max_time: 0.5 };
        let (samples, events) = simulate(&mut g, &mut cmd, Vector3::zeros(), &config).unwrap();

        let kinds: Vec<&EventKind> = events.iter().map(|e| &e.kind).collect();
        assert_eq!(kinds, vec![&EventKind::Saturated, &EventKind::Settled]);

        // Three ticks of 0.047 rad at 270 deg/s to cover 0.1 rad
        let settled = &events[1];
        assert!((settled.time - 0.13).abs() < 1e-9, "settled at {}", settled.time);
        assert_eq!(samples.last().unwrap().angles.pitch, 0.1);
    }

    #[test]
    fn sub_tick_step_still_reports_settle() {
        let mut g = gimbal();
        let mut cmd = StepSchedule::new().at(0.1, Setpoint::new(0.02, 0.0));
        let config = SimConfig { dt: 0.01, max_time: 0.3 };
        let (samples, events) = simulate(&mut g, &mut cmd, Vector3::zeros(), &config).unwrap();

        assert_eq!(samples.last().unwrap().angles.pitch, 0.02);
        let kinds: Vec<&EventKind> = events.iter().map(|e| &e.kind).collect();
        assert_eq!(kinds, vec![&EventKind::Settled]);
        assert!((events[0].time - 0.11).abs() < 1e-9, "settled at {}", events[0].time);

        let summary = crate::io::json::ResponseSummary::from_samples(&samples);
        assert!((summary.last_settle_time.unwrap() - 0.11).abs() < 1e-9);
    }

    #[test]
    fn per_tick_motion_is_rate_limited() {
        let mut g = gimbal();
        let mut cmd = SineSweep::new(0.2, 5.0);
        let config = SimConfig { dt: 0.002, max_time: 1.0 };
        let (samples, _) = simulate(&mut g, &mut cmd, Vector3::zeros(), &config).unwrap();
        let bound = g.max_angular_rate() * config.dt + 1e-12;
        for w in samples.windows(2) {
            assert!((w[1].angles.pitch - w[0].angles.pitch).abs() <= bound);
            assert!((w[1].angles.yaw - w[0].angles.yaw).abs() <= bound);
        }
    }

    #[test]
    fn burnout_reported() {
        let mut g = gimbal();
        let mut cmd = Hold(Setpoint::default());
        let config = SimConfig { dt: 0.01, max_time: 1.5 };
        let (_, events) = simulate(&mut g, &mut cmd, Vector3::zeros(), &config).unwrap();
        let burnout = events.iter().find(|e| e.kind == EventKind::Burnout).unwrap();
        assert!((burnout.time - 1.0).abs() < 0.011);
    }

    #[test]
    fn torque_tracks_moving_cg() {
        let mut g = gimbal();
        let mut cmd = Hold(Setpoint::new(0.0, 0.05));
        let config = SimConfig { dt: 0.1, max_time: 0.5 };
        let (samples, _) = simulate_with(
            &mut g,
            &mut cmd,
            |t| Vector3::new(0.0, 0.0, 0.2 - 0.1 * t),
            &config,
            &mut [],
        )
        .unwrap();
        // CG moving aft shortens the lever arm, torque magnitude shrinks.
        let first = samples[0].torque.norm();
        let last = samples.last().unwrap().torque.norm();
        assert!(last < first, "{} !< {}", last, first);
        assert!((samples[3].center_of_mass.z - (0.2 - 0.1 * 0.3)).abs() < 1e-12);
    }

    #[test]
    fn invalid_config_rejected() {
        let mut g = gimbal();
        let mut cmd = Hold(Setpoint::default());
        let config = SimConfig { dt: -0.01, max_time: 1.0 };
        assert!(simulate(&mut g, &mut cmd, Vector3::zeros(), &config).is_err());
    }
}
