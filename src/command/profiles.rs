use std::f64::consts::TAU;

use super::commander::Commander;
use super::setpoint::Setpoint;

// ---------------------------------------------------------------------------
// Hold: constant setpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct Hold(pub Setpoint);

impl Commander for Hold {
    fn command(&mut self, _time: f64) -> Setpoint {
        self.0
    }

    fn name(&self) -> &str {
        "Hold"
    }
}

// ---------------------------------------------------------------------------
// StepSchedule: piecewise-constant, time-tagged setpoints
// ---------------------------------------------------------------------------

/// Holds each setpoint from its start time until the next one begins.
/// Before the first entry the gimbal is commanded to center.
#[derive(Debug, Clone, Default)]
pub struct StepSchedule {
    steps: Vec<(f64, Setpoint)>,
}

impl StepSchedule {
    pub fn new() -> Self {
        Self { steps: vec![] }
    }

    /// Append a step at time `at` (s). Entries are kept sorted by time.
    pub fn at(mut self, at: f64, setpoint: Setpoint) -> Self {
        let idx = self.steps.partition_point(|s| s.0 <= at);
        self.steps.insert(idx, (at, setpoint));
        self
    }
}

impl Commander for StepSchedule {
    fn command(&mut self, time: f64) -> Setpoint {
        let idx = self.steps.partition_point(|s| s.0 <= time);
        if idx == 0 {
            Setpoint::default()
        } else {
            self.steps[idx - 1].1
        }
    }

    fn name(&self) -> &str {
        "StepSchedule"
    }
}

// ---------------------------------------------------------------------------
// SineSweep: sinusoidal excitation, yaw lagging pitch by a phase offset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct SineSweep {
    pub amplitude: f64,    // rad
    pub frequency: f64,    // Hz
    pub yaw_phase: f64,    // rad, yaw lag behind pitch
}

impl SineSweep {
    pub fn new(amplitude: f64, frequency: f64) -> Self {
        Self { amplitude, frequency, yaw_phase: TAU / 4.0 }
    }
}

impl Commander for SineSweep {
    fn command(&mut self, time: f64) -> Setpoint {
        let phase = TAU * self.frequency * time;
        Setpoint {
            pitch: self.amplitude * phase.sin(),
            yaw: self.amplitude * (phase - self.yaw_phase).sin(),
        }
    }

    fn name(&self) -> &str {
        "SineSweep"
    }
}
