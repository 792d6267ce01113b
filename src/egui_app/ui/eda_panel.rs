//! EDA page: dataset preview and chart sections.

use eframe::egui::{self, RichText, Ui};

use crate::dataset::FireClass;
use crate::egui_app::controller::EdaData;

use super::DashboardApp;
use super::charts;
use super::style;

const CHART_HEIGHT: f32 = 220.0;

impl DashboardApp {
    pub(super) fn render_eda_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading("Predicting Forest Fire in Algeria");
        ui.label(
            RichText::new(
                "Forest fires are a serious issue in Algeria, particularly during the \
                 summer months when hot, dry weather and strong winds let fires spread \
                 rapidly. The charts below explore the Algerian Forest Fires dataset \
                 (UCI Machine Learning Repository): daily weather observations from \
                 two regions in 2012 together with the Fire Weather Index (FWI) system \
                 components and the recorded fire / not fire outcome.",
            )
            .color(palette.text_muted),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!(
                    "Dataset: {}",
                    self.controller.dataset_path().display()
                ))
                .color(palette.text_muted),
            );
            if ui.button("Reload").clicked() {
                self.controller.reload_dataset();
            }
        });

        if let Some(error) = self.controller.eda_error() {
            ui.add_space(8.0);
            ui.colored_label(palette.warning, error);
            return;
        }
        let Some(eda) = self.controller.eda().cloned() else {
            return;
        };

        ui.add_space(8.0);
        self.render_column_reference(ui);
        ui.add_space(8.0);
        render_preview_grid(ui, &eda);

        ui.add_space(12.0);
        ui.separator();
        ui.heading("Forest Fire");
        ui.label(
            RichText::new(format!(
                "{} of {} observed days recorded a forest fire.",
                eda.class_counts.fire,
                eda.class_counts.total()
            ))
            .color(palette.text_muted),
        );
        charts::pie(
            ui,
            &[
                (
                    format!("fire ({})", eda.class_counts.fire),
                    eda.class_counts.fire,
                    palette.series_fire,
                ),
                (
                    format!("not fire ({})", eda.class_counts.not_fire),
                    eda.class_counts.not_fire,
                    palette.series_not_fire,
                ),
            ],
            180.0,
        );
        series_legend(ui);

        ui.add_space(12.0);
        ui.separator();
        ui.heading("Fires by month");
        ui.label(
            RichText::new(
                "Fires cluster in the hottest part of the summer; August combines the \
                 highest temperatures with the lowest humidity and rainfall.",
            )
            .color(palette.text_muted),
        );
        charts::grouped_bars(ui, &eda.by_month, CHART_HEIGHT);
        series_legend(ui);

        ui.add_space(12.0);
        ui.separator();
        ui.heading("Temperature");
        if let Some(mean) = eda.mean_fire_temperature {
            ui.label(
                RichText::new(format!(
                    "Mean temperature on fire days: {mean:.2} °C."
                ))
                .color(palette.text_muted),
            );
        }
        charts::grouped_bars(ui, &eda.by_temperature, CHART_HEIGHT);
        series_legend(ui);

        ui.add_space(12.0);
        ui.separator();
        ui.heading("Relative Humidity");
        ui.label(
            RichText::new(
                "Counts per humidity bin; drier days are markedly more fire-prone.",
            )
            .color(palette.text_muted),
        );
        charts::grouped_bars(ui, &eda.rh_bins, CHART_HEIGHT);
        series_legend(ui);

        ui.add_space(12.0);
        ui.separator();
        ui.heading("Rain");
        ui.label(
            RichText::new(
                "Rain readings on fire days only. Most fires start with no rain at \
                 all; a handful begin under light rain.",
            )
            .color(palette.text_muted),
        );
        charts::grouped_bars(ui, &eda.by_rain, CHART_HEIGHT);
        charts::legend(ui, &[("fire".to_string(), palette.series_fire)]);

        ui.add_space(12.0);
        ui.separator();
        ui.heading("Fire Weather Index (FWI)");
        ui.label(
            RichText::new(
                "FWI danger rating: Low 0-1, Moderate 2-6, High 7-13, Very High above 13.",
            )
            .color(palette.text_muted),
        );
        charts::grouped_bars(ui, &eda.fwi_categories, CHART_HEIGHT);
        series_legend(ui);
        ui.add_space(12.0);
    }

    fn render_column_reference(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        egui::CollapsingHeader::new("Column reference")
            .id_salt("column_reference")
            .show(ui, |ui| {
                for (name, description) in COLUMN_REFERENCE {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(*name).strong());
                        ui.label(RichText::new(*description).color(palette.text_muted));
                    });
                }
            });
    }
}

const COLUMN_REFERENCE: &[(&str, &str)] = &[
    ("day / month / year", "observation date; June to September 2012"),
    ("Temperature", "noon temperature in Celsius, 22 to 42"),
    ("RH", "relative humidity in %, 21 to 90"),
    ("Ws", "wind speed in km/h, 6 to 29"),
    ("Rain", "total daily rain in mm, 0 to 16.8"),
    ("FFMC", "Fine Fuel Moisture Code, 28.6 to 92.5"),
    ("DMC", "Duff Moisture Code, 1.1 to 65.9"),
    ("DC", "Drought Code, 7 to 220.4"),
    ("ISI", "Initial Spread Index, 0 to 18.5"),
    ("BUI", "Buildup Index, 1.1 to 68"),
    ("FWI", "Fire Weather Index, 0 to 31.1"),
    ("Classes", "recorded outcome: fire or not fire"),
];

fn render_preview_grid(ui: &mut Ui, eda: &EdaData) {
    let palette = style::palette();
    egui::CollapsingHeader::new("Data preview")
        .id_salt("data_preview")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("preview_grid")
                .striped(true)
                .min_col_width(44.0)
                .show(ui, |ui| {
                    for header in [
                        "day", "month", "year", "Temp", "RH", "Ws", "Rain", "FFMC", "DMC",
                        "DC", "ISI", "BUI", "FWI", "Classes",
                    ] {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();
                    for row in &eda.preview {
                        ui.label(row.day.to_string());
                        ui.label(row.month.to_string());
                        ui.label(row.year.to_string());
                        ui.label(format!("{:.0}", row.temperature));
                        ui.label(format!("{:.0}", row.rh));
                        ui.label(format!("{:.0}", row.ws));
                        ui.label(format!("{:.1}", row.rain));
                        ui.label(format!("{:.1}", row.ffmc));
                        ui.label(format!("{:.1}", row.dmc));
                        ui.label(format!("{:.1}", row.dc));
                        ui.label(format!("{:.1}", row.isi));
                        ui.label(format!("{:.1}", row.bui));
                        ui.label(format!("{:.1}", row.fwi));
                        let (label, color) = match row.class {
                            FireClass::Fire => ("fire", palette.series_fire),
                            FireClass::NotFire => ("not fire", palette.series_not_fire),
                        };
                        ui.colored_label(color, label);
                        ui.end_row();
                    }
                });
        });
}

fn series_legend(ui: &mut Ui) {
    let palette = style::palette();
    charts::legend(
        ui,
        &[
            ("fire".to_string(), palette.series_fire),
            ("not fire".to_string(), palette.series_not_fire),
        ],
    );
}
