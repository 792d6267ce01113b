#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based Firecast dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use firecast::config::{self, AppSettings};
use firecast::egui_app::controller::DashboardController;
use firecast::egui_app::ui::{DashboardApp, MIN_VIEWPORT_SIZE};
use firecast::inference::InferenceService;
use firecast::logging;
use firecast::model;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = match config::load_or_default() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("Falling back to default settings: {err}");
            AppSettings::default()
        }
    };

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1180.0, 760.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Firecast",
        native_options,
        Box::new(move |_cc| match build_app(settings) {
            Ok(app) => Ok(Box::new(app)),
            Err(message) => Ok(Box::new(LaunchError { message })),
        }),
    )?;
    Ok(())
}

/// Assemble the dashboard; artifact failures abort into the fallback app.
fn build_app(settings: AppSettings) -> Result<DashboardApp, String> {
    let artifacts_dir = settings.resolved_artifacts_dir();
    let artifacts = model::load(&artifacts_dir).map_err(|err| {
        let message = format!(
            "Failed to load prediction artifacts from {}: {err}",
            artifacts_dir.display()
        );
        tracing::error!("{message}");
        message
    })?;
    let service = InferenceService::from_artifacts(artifacts);
    Ok(DashboardApp::new(DashboardController::new(
        service, settings,
    )))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start Firecast");
                ui.label(&self.message);
            });
        });
    }
}
