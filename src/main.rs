use anyhow::Context;
use nalgebra::{UnitQuaternion, Vector3};
use tracing_subscriber::EnvFilter;

use tvc_sim::command::{Setpoint, StepSchedule};
use tvc_sim::config::{GimbalConfigBuilder, SimConfig};
use tvc_sim::gimbal::GimbalController;
use tvc_sim::io::{csv, json};
use tvc_sim::io::json::ResponseSummary;
use tvc_sim::motor::{presets, ThrustSource};
use tvc_sim::sim::{self, EventDetector, EventKind};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // -----------------------------------------------------------------------
    // Actuator: 270 deg/s servos, pivot 0.45 m aft of the body origin
    // -----------------------------------------------------------------------
    let motor = presets::hobby_d12();
    let gimbal_config = GimbalConfigBuilder::new()
        .max_refresh_speed_deg(270.0)
        .mount_offset(Vector3::new(0.0, 0.0, -0.45))
        .build()
        .context("invalid gimbal configuration")?;
    let mut gimbal = GimbalController::from_config(&motor, &gimbal_config)?;

    let config = SimConfig { dt: 0.001, max_time: 2.0 };

    // Doublet on pitch, then a yaw kick, then return to center
    let mut commander = StepSchedule::new()
        .at(0.20, Setpoint::from_degrees(5.0, 0.0))
        .at(0.50, Setpoint::from_degrees(-5.0, 0.0))
        .at(0.80, Setpoint::from_degrees(0.0, 3.0))
        .at(1.20, Setpoint::from_degrees(0.0, 0.0));

    // Propellant burn moves the CG forward
    let burn = motor.burn_time().unwrap_or(config.max_time);
    let cg = |t: f64| Vector3::new(0.0, 0.0, 0.10 + 0.02 * (t / burn).min(1.0));

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let mut settle = sim::event::SettleDetector;
    let mut saturation = sim::event::SaturationDetector { max_angular_rate: gimbal.max_angular_rate() };
    let mut burnout = sim::event::BurnoutDetector::new();
    let mut detectors: [&mut dyn EventDetector; 3] = [&mut settle, &mut saturation, &mut burnout];
    let (samples, events) =
        sim::simulate_with(&mut gimbal, &mut commander, cg, &config, &mut detectors)?;

    let summary = ResponseSummary::from_samples(&samples);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  TVC GIMBAL RESPONSE — motor {}", motor.name);
    println!("====================================================================");
    println!();
    println!("  Actuator");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Slew rate:     {:>8.1} deg/s ({:.3} rad/s)",
        gimbal_config.max_refresh_speed_deg,
        gimbal.max_angular_rate()
    );
    println!("  Mount offset:  {:>8.3} m (z)", gimbal.mount_offset().z);
    println!(
        "  Motor:         {:>8.1} N peak   {:>6.2} N·s   burn {:.2} s",
        motor.peak(),
        motor.total_impulse(),
        burn
    );
    println!();

    println!("  Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for e in &events {
        let label = match e.kind {
            EventKind::Settled => "SETTLED",
            EventKind::Saturated => "SATURATED",
            EventKind::Burnout => "BURNOUT",
        };
        println!(
            "  {:<10} t={:>6.3}s   pitch={:>6.2}°   yaw={:>6.2}°   |τ|={:.3} N·m",
            label,
            e.time,
            e.sample.angles.pitch.to_degrees(),
            e.sample.angles.yaw.to_degrees(),
            e.sample.torque.norm(),
        );
    }
    println!();

    println!("  Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Peak force:    {:>8.2} N", summary.peak_force);
    println!("  Peak torque:   {:>8.3} N·m", summary.peak_torque);
    println!("  Impulse:       {:>8.2} N·s", summary.total_impulse);
    println!("  Max error:     {:>8.2} deg", summary.max_tracking_error_deg);
    let attitude: UnitQuaternion<f64> = gimbal.attitude();
    println!("  Final tilt:    {:>8.3} deg", attitude.angle().to_degrees());
    println!();

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------
    csv::write_samples_file("gimbal_response.csv", &samples).context("writing CSV")?;
    json::write_summary_file("gimbal_summary.json", &motor.name, &summary).context("writing JSON")?;
    println!("  Exported: gimbal_response.csv, gimbal_summary.json");
    println!("====================================================================");
    println!();
    Ok(())
}
