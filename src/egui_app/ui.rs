//! egui renderer for the dashboard UI.

mod charts;
mod eda_panel;
mod predict_panel;
pub mod style;

use eframe::egui::{self, Frame, Margin, RichText, StrokeKind};

use crate::egui_app::controller::DashboardController;
use crate::egui_app::state::Page;

/// Smallest viewport the layout stays readable at.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);

/// Renders the dashboard using the shared controller state.
pub struct DashboardApp {
    controller: DashboardController,
    visuals_set: bool,
}

impl DashboardApp {
    /// Wrap a fully-initialized controller.
    pub fn new(controller: DashboardController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Firecast — Algerian Forest Fires")
                            .color(palette.text_primary)
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
                        ui.label(RichText::new(APP_VERSION).color(palette.text_muted));
                    });
                });
            });
    }

    fn render_nav(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("page_nav")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                let palette = style::palette();
                ui.add_space(6.0);
                ui.label(RichText::new("Page Navigation").color(palette.text_muted));
                ui.add_space(6.0);
                let current = self.controller.ui.page;
                for page in [Page::Eda, Page::Predict] {
                    if ui
                        .selectable_label(current == page, page.title())
                        .clicked()
                    {
                        self.controller.select_page(page);
                    }
                }
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = self.controller.ui.status.clone();
                ui.horizontal(|ui| {
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(
                        badge_rect,
                        0.0,
                        style::status_badge_color(status.tone),
                    );
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        style::inner_border(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(status.tone.badge_label()).color(palette.text_primary),
                    );
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                });
            });
    }

    fn render_central(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .show(ui, |ui| match self.controller.ui.page {
                    Page::Eda => self.render_eda_panel(ui),
                    Page::Predict => self.render_predict_panel(ui),
                });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_top_bar(ctx);
        self.render_status(ctx);
        self.render_nav(ctx);
        self.render_central(ctx);
    }
}
