use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use nalgebra::Vector3;

use tvc_sim::command::{Setpoint, StepSchedule};
use tvc_sim::config::SimConfig;
use tvc_sim::gimbal::GimbalController;
use tvc_sim::motor::presets;
use tvc_sim::sim::{self, GimbalSample};

fn main() -> eframe::Result {
    let motor = presets::hobby_d12();
    let mut gimbal = match GimbalController::new(&motor, 270.0) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("gimbal setup failed: {e}");
            return Ok(());
        }
    };
    gimbal.move_to_motor(Vector3::new(0.0, 0.0, -0.45));

    let mut commander = StepSchedule::new()
        .at(0.2, Setpoint::from_degrees(5.0, 0.0))
        .at(0.5, Setpoint::from_degrees(-5.0, 2.0))
        .at(0.9, Setpoint::from_degrees(0.0, 0.0));
    let config = SimConfig { dt: 0.001, max_time: 1.8 };
    let samples = match sim::simulate(&mut gimbal, &mut commander, Vector3::new(0.0, 0.0, 0.1), &config) {
        Ok((samples, _)) => samples,
        Err(e) => {
            eprintln!("simulation failed: {e}");
            return Ok(());
        }
    };

    let app = GimbalViz { samples, motor_name: motor.name.clone() };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("TVC Gimbal Response", options, Box::new(|_| Ok(Box::new(app))))
}

struct GimbalViz {
    samples: Vec<GimbalSample>,
    motor_name: String,
}

impl eframe::App for GimbalViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let step = (self.samples.len() / 2000).max(1);
        let sampled: Vec<&GimbalSample> = self.samples.iter().step_by(step).collect();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("Motor: {}", self.motor_name));
            let peak_t = self.samples.iter().map(|s| s.torque.norm()).fold(0.0_f64, f64::max);
            let peak_f = self.samples.iter().map(|s| s.force.norm()).fold(0.0_f64, f64::max);
            ui.label(format!(
                "Peak force: {:.1} N  |  Peak torque: {:.2} N·m  |  Duration: {:.2} s",
                peak_f,
                peak_t,
                self.samples.last().map_or(0.0, |s| s.time),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Pitch vs target
                ui.vertical(|ui| {
                    ui.label("Pitch (deg)");
                    let actual: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.angles.pitch.to_degrees()])
                        .collect();
                    let target: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.target.pitch.to_degrees()])
                        .collect();
                    Plot::new("pitch")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Target", target));
                            plot_ui.line(Line::new("Pitch", actual));
                        });
                });

                // Yaw vs target
                ui.vertical(|ui| {
                    ui.label("Yaw (deg)");
                    let actual: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.angles.yaw.to_degrees()])
                        .collect();
                    let target: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.target.yaw.to_degrees()])
                        .collect();
                    Plot::new("yaw")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Target", target));
                            plot_ui.line(Line::new("Yaw", actual));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Thrust magnitude
                ui.vertical(|ui| {
                    ui.label("Thrust (N)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.thrust])
                        .collect();
                    Plot::new("thrust")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Thrust", points));
                        });
                });

                // Torque components
                ui.vertical(|ui| {
                    ui.label("Torque about CG (N·m)");
                    let tx: PlotPoints = sampled.iter().map(|s| [s.time, s.torque.x]).collect();
                    let ty: PlotPoints = sampled.iter().map(|s| [s.time, s.torque.y]).collect();
                    Plot::new("torque")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("τx", tx));
                            plot_ui.line(Line::new("τy", ty));
                        });
                });
            });
        });
    }
}
