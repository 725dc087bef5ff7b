use std::io::{self, Write};

use crate::sim::GimbalSample;

/// Summary statistics computed from a gimbal run.
#[derive(Debug, Clone, Default)]
pub struct ResponseSummary {
    pub duration: f64,
    pub peak_force: f64,
    pub peak_torque: f64,
    pub max_pitch_deg: f64,
    pub max_yaw_deg: f64,
    pub max_tracking_error_deg: f64,
    pub total_impulse: f64,
    pub last_settle_time: Option<f64>,
}

impl ResponseSummary {
    /// Compute summary from recorded samples. Empty input gives all zeros.
    pub fn from_samples(samples: &[GimbalSample]) -> Self {
        let peak_force = samples.iter().map(|s| s.force.norm()).fold(0.0_f64, f64::max);
        let peak_torque = samples.iter().map(|s| s.torque.norm()).fold(0.0_f64, f64::max);
        let max_pitch = samples.iter().map(|s| s.angles.pitch.abs()).fold(0.0_f64, f64::max);
        let max_yaw = samples.iter().map(|s| s.angles.yaw.abs()).fold(0.0_f64, f64::max);
        let max_err = samples.iter().map(|s| s.tracking_error()).fold(0.0_f64, f64::max);

        // Trapezoidal impulse of the thrust magnitude
        let total_impulse: f64 = samples
            .windows(2)
            .map(|w| 0.5 * (w[0].force.norm() + w[1].force.norm()) * (w[1].time - w[0].time))
            .sum();

        let last_settle_time = samples
            .windows(2)
            .filter(|w| w[1].came_to_rest(&w[0]))
            .map(|w| w[1].time)
            .last();

        ResponseSummary {
            duration: samples.last().map_or(0.0, |s| s.time),
            peak_force,
            peak_torque,
            max_pitch_deg: max_pitch.to_degrees(),
            max_yaw_deg: max_yaw.to_degrees(),
            max_tracking_error_deg: max_err.to_degrees(),
            total_impulse,
            last_settle_time,
        }
    }
}

/// Write response summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    name: &str,
    summary: &ResponseSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"run\": \"{}\",", name.replace('\\', "\\\\").replace('"', "\\\""))?;
    writeln!(writer, "  \"response\": {{")?;
    writeln!(writer, "    \"duration_s\": {:.4},", summary.duration)?;
    writeln!(writer, "    \"max_pitch_deg\": {:.4},", summary.max_pitch_deg)?;
    writeln!(writer, "    \"max_yaw_deg\": {:.4},", summary.max_yaw_deg)?;
    writeln!(writer, "    \"max_tracking_error_deg\": {:.4},", summary.max_tracking_error_deg)?;
    match summary.last_settle_time {
        Some(t) => writeln!(writer, "    \"last_settle_time_s\": {:.4}", t)?,
        None => writeln!(writer, "    \"last_settle_time_s\": null")?,
    }
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"loads\": {{")?;
    writeln!(writer, "    \"peak_force_n\": {:.4},", summary.peak_force)?;
    writeln!(writer, "    \"peak_torque_nm\": {:.4},", summary.peak_torque)?;
    writeln!(writer, "    \"total_impulse_ns\": {:.4}", summary.total_impulse)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write response summary JSON to a file.
pub fn write_summary_file(path: &str, name: &str, summary: &ResponseSummary) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, name, summary)
}
