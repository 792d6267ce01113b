//! Painter-based charts for the EDA page.
//!
//! Rendering stays on the egui painter: bars are filled rects, pies are
//! triangle fans. Layout adapts to the available width each frame.

use eframe::egui::{self, Align2, Color32, Rect, Sense, Shape, StrokeKind, TextStyle, Ui};

use crate::dataset::stats::BucketCounts;

use super::style;

const LABEL_BAND: f32 = 18.0;
const PLOT_PADDING: f32 = 8.0;

/// Draw a two-series grouped bar chart for fire / not-fire buckets.
pub(super) fn grouped_bars(ui: &mut Ui, buckets: &[BucketCounts], height: f32) {
    if buckets.is_empty() {
        ui.label("No data to chart");
        return;
    }
    let palette = style::palette();
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, palette.bg_primary);
    painter.rect_stroke(rect, 0.0, style::inner_border(), StrokeKind::Inside);

    let max_count = buckets
        .iter()
        .map(|bucket| bucket.fire.max(bucket.not_fire))
        .max()
        .unwrap_or(0)
        .max(1) as f32;
    let plot = Rect::from_min_max(
        rect.min + egui::vec2(PLOT_PADDING, PLOT_PADDING),
        rect.max - egui::vec2(PLOT_PADDING, LABEL_BAND),
    );
    let slot_width = plot.width() / buckets.len() as f32;
    let bar_width = (slot_width * 0.35).min(26.0).max(2.0);
    let font_id = TextStyle::Small.resolve(ui.style());
    // Thin slots cannot fit every axis label; keep roughly one per 40px.
    let label_step = (40.0 / slot_width).ceil().max(1.0) as usize;

    for (idx, bucket) in buckets.iter().enumerate() {
        let center_x = plot.left() + (idx as f32 + 0.5) * slot_width;
        for (offset, count, color) in [
            (-bar_width / 2.0, bucket.fire, palette.series_fire),
            (bar_width / 2.0, bucket.not_fire, palette.series_not_fire),
        ] {
            let bar_height = plot.height() * count as f32 / max_count;
            let x = center_x + offset;
            let bar = Rect::from_min_max(
                egui::pos2(x - bar_width / 2.0, plot.bottom() - bar_height),
                egui::pos2(x + bar_width / 2.0, plot.bottom()),
            );
            painter.rect_filled(bar, 0.0, color);
        }
        if idx % label_step == 0 {
            painter.text(
                egui::pos2(center_x, rect.bottom() - LABEL_BAND / 2.0),
                Align2::CENTER_CENTER,
                &bucket.label,
                font_id.clone(),
                palette.text_muted,
            );
        }
    }
}

/// Draw a pie chart for labeled counts.
pub(super) fn pie(ui: &mut Ui, slices: &[(String, usize, Color32)], diameter: f32) {
    let total: usize = slices.iter().map(|(_, count, _)| count).sum();
    if total == 0 {
        ui.label("No data to chart");
        return;
    }
    let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = diameter / 2.0 - 2.0;

    let mut angle = -std::f32::consts::FRAC_PI_2;
    for (_, count, color) in slices {
        if *count == 0 {
            continue;
        }
        let sweep = std::f32::consts::TAU * *count as f32 / total as f32;
        paint_sector(&painter, center, radius, angle, angle + sweep, *color);
        angle += sweep;
    }
    painter.circle_stroke(center, radius, style::inner_border());
}

/// Draw a legend row of color swatches and labels.
pub(super) fn legend(ui: &mut Ui, entries: &[(String, Color32)]) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        for (label, color) in entries {
            let (swatch, _) =
                ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
            ui.painter().rect_filled(swatch, 0.0, *color);
            ui.label(egui::RichText::new(label).color(palette.text_muted));
            ui.add_space(12.0);
        }
    });
}

fn paint_sector(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    start: f32,
    end: f32,
    color: Color32,
) {
    // Triangle fan; sectors wider than pi are not convex as one polygon.
    const STEP: f32 = 0.08;
    let mut angle = start;
    while angle < end {
        let next = (angle + STEP).min(end);
        let a = center + radius * egui::vec2(angle.cos(), angle.sin());
        let b = center + radius * egui::vec2(next.cos(), next.sin());
        painter.add(Shape::convex_polygon(
            vec![center, a, b],
            color,
            egui::Stroke::NONE,
        ));
        angle = next;
    }
}
