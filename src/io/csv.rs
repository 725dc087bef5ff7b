use std::io::{self, Write};

use crate::sim::GimbalSample;

/// Write gimbal samples in CSV format.
///
/// Columns: time, pitch_deg, yaw_deg, target_pitch_deg, target_yaw_deg,
///          thrust, force_x, force_y, force_z, torque_x, torque_y, torque_z,
///          cg_x, cg_y, cg_z
pub fn write_samples<W: Write>(writer: &mut W, samples: &[GimbalSample]) -> io::Result<()> {
    writeln!(
        writer,
        "time,pitch_deg,yaw_deg,target_pitch_deg,target_yaw_deg,\
         thrust,force_x,force_y,force_z,torque_x,torque_y,torque_z,\
         cg_x,cg_y,cg_z"
    )?;

    for s in samples {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},\
             {:.4},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},\
             {:.4},{:.4},{:.4}",
            s.time,
            s.angles.pitch.to_degrees(), s.angles.yaw.to_degrees(),
            s.target.pitch.to_degrees(), s.target.yaw.to_degrees(),
            s.thrust,
            s.force.x, s.force.y, s.force.z,
            s.torque.x, s.torque.y, s.torque.z,
            s.center_of_mass.x, s.center_of_mass.y, s.center_of_mass.z,
        )?;
    }

    Ok(())
}

/// Write samples to a CSV file at the given path.
pub fn write_samples_file(path: &str, samples: &[GimbalSample]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_samples(&mut file, samples)
}
