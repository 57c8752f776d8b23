//! Reusable UI components

use crate::rows::SyncStats;
use crate::theme;
use eframe::egui;

/// Badge showing how many times a row has been built. Green for once, amber after that.
pub fn build_count_badge(ui: &mut egui::Ui, builds: Option<u32>) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(theme::BADGE_WIDTH, theme::BADGE_HEIGHT),
        egui::Sense::hover(),
    );

    if ui.is_rect_visible(rect) {
        let (text, color) = match builds {
            Some(1) => ("×1".to_string(), theme::STATUS_SUCCESS),
            Some(n) => (format!("×{}", n), theme::STATUS_WARNING),
            None => ("–".to_string(), theme::TEXT_DIM),
        };
        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_DEFAULT, color.gamma_multiply(0.12));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::monospace(theme::FONT_SMALL),
            color,
        );
    }

    response.on_hover_text("Times this row has been built")
}

/// Small "label value" pair for the stats strip
pub fn stat(ui: &mut egui::Ui, label: &str, value: impl ToString, color: egui::Color32) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(label)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_MUTED),
        )
        .selectable(false),
    );
    ui.add(
        egui::Label::new(
            egui::RichText::new(value.to_string())
                .size(theme::FONT_LABEL)
                .strong()
                .color(color),
        )
        .selectable(false),
    );
}

/// One line summary of the last sync
pub fn describe_sync(stats: &SyncStats) -> String {
    format!(
        "{} reused, {} rebuilt, {} new, {} dropped",
        stats.reused, stats.rebuilt, stats.inserted, stats.dropped
    )
}
