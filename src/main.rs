//! hypno-gif - Hypnotic GIF generator
//!
//! This application takes an animated GIF and warps every frame with a
//! time-varying rotation, pulsing zoom, gentle shear and a blue tint,
//! producing a seamlessly looping "hypnotic" version next to the original.
//!
//! The window only collects the input file and three intensities; the
//! actual work runs on a worker thread that streams status lines back.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use eframe::egui;

mod animation;
mod effects;
mod error;
mod job;

use effects::EffectParameters;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting hypno-gif");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 600.0])
            .with_title("Hypnotic GIF Generator"),
        ..Default::default()
    };

    eframe::run_native(
        "hypno-gif",
        options,
        Box::new(|cc| Ok(Box::new(HypnoApp::new(cc)))),
    )
}

/// Raw slider values as shown in the window
struct ControlState {
    /// Rotation intensity in degrees (0 to 180)
    rotation_degrees: f64,
    /// Zoom pulse in percent (0 to 100)
    zoom_percent: f64,
    /// Blue effect intensity (0 to 100)
    color_intensity: u8,
}

impl Default for ControlState {
    fn default() -> Self {
        let defaults = EffectParameters::default();
        Self {
            rotation_degrees: defaults.max_rotation_degrees,
            zoom_percent: defaults.max_zoom_fraction * 100.0,
            color_intensity: defaults.max_color_intensity,
        }
    }
}

impl ControlState {
    fn params(&self) -> EffectParameters {
        EffectParameters::from_controls(
            self.rotation_degrees,
            self.zoom_percent,
            self.color_intensity,
        )
    }
}

/// Messages from the worker thread
enum JobMessage {
    Status(String),
    Finished(Result<PathBuf, String>),
}

/// Outcome popup shown after a run
struct Dialog {
    title: &'static str,
    message: String,
}

/// Main application state
struct HypnoApp {
    selected_file: Option<PathBuf>,
    controls: ControlState,
    status: String,
    job: Option<Receiver<JobMessage>>,
    dialog: Option<Dialog>,
}

impl HypnoApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            selected_file: None,
            controls: ControlState::default(),
            status: "Waiting...".to_string(),
            job: None,
            dialog: None,
        }
    }

    fn is_running(&self) -> bool {
        self.job.is_some()
    }

    fn pick_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("GIF files", &["gif"])
            .pick_file()
        {
            log::info!("Selected {}", path.display());
            self.selected_file = Some(path);
        }
    }

    /// Start processing the selected file on a worker thread
    fn start_job(&mut self, ctx: &egui::Context) {
        let Some(path) = self.selected_file.clone() else {
            return;
        };
        let params = self.controls.params();
        let (tx, rx) = mpsc::channel();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let mut sink = |message: &str| {
                let _ = tx.send(JobMessage::Status(message.to_string()));
                ctx.request_repaint();
            };
            let result = job::run(&path, &params, &mut sink).map_err(|e| e.to_string());
            let _ = tx.send(JobMessage::Finished(result));
            ctx.request_repaint();
        });

        self.status = job::STATUS_STARTED.to_string();
        self.job = Some(rx);
    }

    /// Drain pending worker messages
    fn poll_job(&mut self) {
        let Some(rx) = &self.job else {
            return;
        };

        let mut finished = None;
        loop {
            match rx.try_recv() {
                Ok(JobMessage::Status(status)) => self.status = status,
                Ok(JobMessage::Finished(result)) => {
                    finished = Some(result);
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    finished = Some(Err("worker stopped unexpectedly".to_string()));
                    break;
                }
            }
        }

        if let Some(result) = finished {
            self.job = None;
            self.dialog = Some(match result {
                Ok(path) => Dialog {
                    title: "Success!",
                    message: format!("GIF created at:\n{}", path.display()),
                },
                Err(e) => {
                    self.status = "Error.".to_string();
                    Dialog {
                        title: "Error",
                        message: format!("An error occurred:\n{}", e),
                    }
                }
            });
        }
    }
}

impl eframe::App for HypnoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_job();

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Animation Settings");
            });
            ui.separator();

            // File selection
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!self.is_running(), egui::Button::new("1. Select source GIF"))
                    .clicked()
                {
                    self.pick_file();
                }

                match &self.selected_file {
                    Some(path) => {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        ui.colored_label(egui::Color32::GREEN, name);
                    }
                    None => {
                        ui.colored_label(egui::Color32::RED, "No file selected");
                    }
                }
            });

            ui.add_space(10.0);

            // Intensities
            ui.add_enabled_ui(!self.is_running(), |ui| {
                ui.label("Rotation intensity (degrees):");
                ui.add(egui::Slider::new(&mut self.controls.rotation_degrees, 0.0..=180.0));

                ui.label("Pulse intensity (zoom %):");
                ui.add(egui::Slider::new(&mut self.controls.zoom_percent, 0.0..=100.0));

                ui.label("Blue effect intensity:");
                ui.add(egui::Slider::new(&mut self.controls.color_intensity, 0..=100));
            });

            ui.add_space(30.0);

            ui.vertical_centered(|ui| {
                let ready = self.selected_file.is_some() && !self.is_running();
                let button = egui::Button::new(
                    egui::RichText::new("2. GENERATE HYPNOTIC GIF").strong().size(16.0),
                )
                .fill(egui::Color32::from_rgb(76, 175, 80));

                if ui.add_enabled(ready, button).clicked() {
                    self.start_job(ctx);
                }

                if self.is_running() {
                    ui.add_space(10.0);
                    ui.spinner();
                }
            });
        });

        // Outcome popup
        let mut close = false;
        if let Some(dialog) = &self.dialog {
            egui::Window::new(dialog.title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(&dialog.message);
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                });
        }
        if close {
            self.dialog = None;
        }
    }
}
