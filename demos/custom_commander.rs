use nalgebra::Vector3;

use tvc_sim::command::{Commander, Setpoint};
use tvc_sim::config::SimConfig;
use tvc_sim::gimbal::GimbalController;
use tvc_sim::motor::ConstantThrust;
use tvc_sim::sim;

/// Bang-bang commander: alternates full positive and negative pitch
/// deflection with a fixed half-period.
struct BangBangCommander {
    deflection: f64,
    half_period: f64,
}

impl Commander for BangBangCommander {
    fn command(&mut self, time: f64) -> Setpoint {
        let phase = (time / self.half_period) as u64;
        let pitch = if phase % 2 == 0 { self.deflection } else { -self.deflection };
        Setpoint::new(pitch, 0.0)
    }

    fn name(&self) -> &str {
        "BangBang"
    }
}

fn main() -> Result<(), tvc_sim::GimbalError> {
    let motor = ConstantThrust::new(30.0, 2.0);
    let mut gimbal = GimbalController::new(&motor, 180.0)?;
    gimbal.move_to_motor(Vector3::new(0.0, 0.0, -0.6));

    let mut commander = BangBangCommander {
        deflection: 6.0_f64.to_radians(),
        half_period: 0.15,
    };
    let config = SimConfig { dt: 0.001, max_time: 1.0 };

    println!("Simulating with {} commander...", commander.name());
    let (samples, events) = sim::simulate(&mut gimbal, &mut commander, Vector3::zeros(), &config)?;

    let peak_torque = samples.iter().map(|s| s.torque.norm()).fold(0.0_f64, f64::max);
    let settled = events.iter().filter(|e| e.kind == sim::EventKind::Settled).count();

    println!("Peak torque: {:.3} N·m", peak_torque);
    println!("Settle events: {}", settled);
    println!("Samples: {}", samples.len());
    Ok(())
}
