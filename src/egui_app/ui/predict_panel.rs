//! Prediction page: bounded input form and verdict display.

use eframe::egui::{self, RichText, Ui};

use crate::inference::Verdict;

use super::DashboardApp;
use super::style;

impl DashboardApp {
    pub(super) fn render_predict_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading("Predict Forest Fire");
        ui.label(
            RichText::new(
                "Enter a day of weather readings and fire-weather indices; the loaded \
                 classifier answers whether a forest fire is expected.",
            )
            .color(palette.text_muted),
        );
        ui.add_space(8.0);

        self.render_form(ui);
        ui.add_space(8.0);
        self.render_feature_preview(ui);
        ui.add_space(12.0);

        if ui.button("Is there a forest fire?").clicked() {
            self.controller.submit_prediction();
        }

        if let Some(verdict) = self.controller.ui.verdict {
            ui.add_space(12.0);
            let color = match verdict {
                Verdict::Fire => palette.series_fire,
                Verdict::NoFire => palette.success,
            };
            ui.heading(RichText::new(verdict.label()).color(color));
        }
    }

    fn render_form(&mut self, ui: &mut Ui) {
        let form = &mut self.controller.ui.form;
        egui::Grid::new("predict_form")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label("Date");
                ui.add(egui::Slider::new(&mut form.day, 1..=31));
                ui.end_row();
                ui.label("Month");
                ui.add(egui::Slider::new(&mut form.month, 1..=12));
                ui.end_row();
                ui.label("Year");
                ui.add(egui::DragValue::new(&mut form.year).range(2012..=2012));
                ui.end_row();
            });
        ui.separator();
        egui::Grid::new("predict_form_weather")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label("Temperature (°C)");
                ui.add(egui::Slider::new(&mut form.temperature, 22..=42));
                ui.end_row();
                ui.label("Relative humidity (%)");
                ui.add(egui::Slider::new(&mut form.rh, 21..=90));
                ui.end_row();
                ui.label("Wind speed (km/h)");
                ui.add(egui::Slider::new(&mut form.ws, 6..=29));
                ui.end_row();
                ui.label("Rain (mm)");
                ui.add(
                    egui::DragValue::new(&mut form.rain)
                        .range(0.0..=16.8)
                        .speed(0.01)
                        .fixed_decimals(2),
                );
                ui.end_row();
            });
        ui.separator();
        egui::Grid::new("predict_form_indices")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for (label, value, min, max) in [
                    ("Fine Fuel Moisture Code (FFMC)", &mut form.ffmc, 28.6, 92.5),
                    ("Duff Moisture Code (DMC)", &mut form.dmc, 1.1, 65.9),
                    ("Drought Code (DC)", &mut form.dc, 7.0, 220.4),
                    ("Initial Spread Index (ISI)", &mut form.isi, 0.0, 18.5),
                    ("Buildup Index (BUI)", &mut form.bui, 1.1, 68.0),
                    ("Fire Weather Index (FWI)", &mut form.fwi, 0.0, 31.1),
                ] {
                    ui.label(label);
                    ui.add(
                        egui::DragValue::new(value)
                            .range(min..=max)
                            .speed(0.1)
                            .fixed_decimals(2),
                    );
                    ui.end_row();
                }
            });
    }

    fn render_feature_preview(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let features = self.controller.feature_preview();
        egui::CollapsingHeader::new("Model input row")
            .id_salt("model_input_row")
            .show(ui, |ui| {
                ui.label(
                    RichText::new(
                        "The exact feature row the classifier receives, after the \
                         excluded columns are dropped.",
                    )
                    .color(palette.text_muted),
                );
                egui::Grid::new("feature_preview_grid")
                    .striped(true)
                    .min_col_width(52.0)
                    .show(ui, |ui| {
                        for name in features.names() {
                            ui.label(RichText::new(*name).strong());
                        }
                        ui.end_row();
                        for value in features.values() {
                            ui.label(format!("{value:.2}"));
                        }
                        ui.end_row();
                    });
            });
    }
}
