use nalgebra::Vector3;

use tvc_sim::command::SineSweep;
use tvc_sim::config::SimConfig;
use tvc_sim::gimbal::GimbalController;
use tvc_sim::io::json::ResponseSummary;
use tvc_sim::motor::presets;
use tvc_sim::sim;

/// Frequency sweep: tracking error grows once the sine outruns the servo.
fn main() -> Result<(), tvc_sim::GimbalError> {
    let motor = presets::bench_constant();
    let config = SimConfig { dt: 0.0005, max_time: 2.0 };
    let amplitude = 4.0_f64.to_radians();

    println!("{:>8}  {:>12}", "f (Hz)", "max err (deg)");
    for &freq in &[0.5, 1.0, 2.0, 5.0, 10.0, 20.0] {
        let mut gimbal = GimbalController::new(&motor, 270.0)?;
        gimbal.move_to_motor(Vector3::new(0.0, 0.0, -0.4));
        let mut sweep = SineSweep::new(amplitude, freq);
        let (samples, _) = sim::simulate(&mut gimbal, &mut sweep, Vector3::zeros(), &config)?;
        let summary = ResponseSummary::from_samples(&samples);
        println!("{:>8.1}  {:>12.3}", freq, summary.max_tracking_error_deg);
    }
    Ok(())
}
