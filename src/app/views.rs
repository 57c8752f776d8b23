//! View rendering (header, product table, stats strip)

use super::{App, ListAction};
use crate::rows::RowKey;
use crate::theme;
use crate::types::KeyMode;
use crate::ui::components::{build_count_badge, describe_sync, stat};
use crate::utils::format_price;
use eframe::egui;

impl App {
    /// Title, key mode toggle and the two move buttons.
    /// Returns the action the user triggered this frame, if any.
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) -> Option<ListAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_XL);
            ui.add(
                egui::Label::new(
                    egui::RichText::new("List Performance Demo")
                        .size(theme::FONT_TITLE)
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_XL);
        });
        ui.separator();
        ui.add_space(theme::SPACING_XL);

        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("LazyList Performance (key required)")
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_SECONDARY),
                )
                .selectable(false),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut stable = self.key_mode == KeyMode::Stable;
                if theme::segmented_toggle(
                    ui,
                    KeyMode::Stable.label(),
                    KeyMode::Positional.label(),
                    &mut stable,
                ) {
                    let mode = if stable { KeyMode::Stable } else { KeyMode::Positional };
                    action = Some(ListAction::SetKeyMode(mode));
                }
            });
        });
        ui.add_space(theme::SPACING_MD);

        ui.horizontal(|ui| {
            let down = format!("{}  Move First Item Down", egui_phosphor::regular::ARROW_DOWN);
            if ui.add(theme::button_accent(down)).on_hover_text("Shortcut: Arrow Down").clicked() {
                action = Some(ListAction::MoveFirstDown);
            }
            let up = format!("{}  Move Last Item Up", egui_phosphor::regular::ARROW_UP);
            if ui.add(theme::button_accent(up)).on_hover_text("Shortcut: Arrow Up").clicked() {
                action = Some(ListAction::MoveLastUp);
            }
            let reset = format!("{}  Reset", egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE);
            if ui.add(theme::button(reset)).clicked() {
                action = Some(ListAction::Reset);
            }
        });
        ui.add_space(theme::SPACING_MD);

        action
    }

    /// Virtualized product table. Interactive row widgets live under the row's [`RowKey`],
    /// so with stable keys egui's per-widget state follows the product, not the slot.
    pub(crate) fn render_product_list(&mut self, ui: &mut egui::Ui) -> Option<ListAction> {
        use egui_extras::{Column, TableBuilder};

        let mut action = None;
        // Cheap: shares the Arc, keeps the table independent of &mut self
        let products = self.products.clone();
        let mode = self.key_mode;
        let show_builds = self.show_build_counts;

        let mut table = TableBuilder::new(ui)
            .id_salt("product_table")
            .striped(false)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .min_scrolled_height(0.0)
            .column(Column::exact(56.0))
            .column(Column::remainder().clip(true))
            .column(Column::exact(80.0));
        if show_builds {
            table = table.column(Column::exact(theme::BADGE_WIDTH + theme::SPACING_MD));
        }
        table = table.column(Column::exact(96.0));

        table
            .header(theme::HEADER_HEIGHT, |mut header| {
                for title in ["ID", "NAME", "PRICE"] {
                    header.col(|ui| header_label(ui, title));
                }
                if show_builds {
                    header.col(|ui| header_label(ui, "BUILDS"));
                }
                header.col(|_ui| {});
            })
            .body(|body| {
                body.rows(theme::ROW_HEIGHT, products.len(), |mut row| {
                    let index = row.index();
                    let Some(product) = products.get(index) else {
                        return;
                    };
                    let key = RowKey::for_row(mode, index, product);

                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(product.id.to_string())
                                    .monospace()
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&product.name)
                                    .strong()
                                    .size(theme::FONT_BODY)
                                    .color(theme::TEXT_PRIMARY),
                            )
                            .truncate()
                            .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format_price(product.price))
                                    .size(theme::FONT_BODY)
                                    .color(theme::ACCENT),
                            )
                            .selectable(false),
                        );
                    });
                    if show_builds {
                        row.col(|ui| {
                            build_count_badge(ui, self.rows.build_count(key));
                        });
                    }
                    row.col(|ui| {
                        let picked = ui
                            .push_id(key, |ui| {
                                let icon = |ui: &mut egui::Ui, glyph: &str, hint: &str| {
                                    ui.add(
                                        egui::Button::new(glyph)
                                            .small()
                                            .fill(egui::Color32::TRANSPARENT),
                                    )
                                    .on_hover_text(hint)
                                    .clicked()
                                };
                                let up = icon(ui, egui_phosphor::regular::ARROW_UP, "Move up");
                                let down = icon(ui, egui_phosphor::regular::ARROW_DOWN, "Move down");
                                let bump = icon(ui, egui_phosphor::regular::PLUS, "Bump price");
                                match (up, down, bump) {
                                    (true, _, _) => Some(ListAction::Move { index, up: true }),
                                    (_, true, _) => Some(ListAction::Move { index, up: false }),
                                    (_, _, true) => Some(ListAction::BumpPrice(product.id)),
                                    _ => None,
                                }
                            })
                            .inner;
                        if picked.is_some() {
                            action = picked;
                        }
                    });
                });
            });

        action
    }

    /// Bottom strip: move count, last sync outcome, lifetime builds
    pub(crate) fn render_stats(&mut self, ui: &mut egui::Ui) {
        ui.add_space(theme::SPACING_SM);
        ui.horizontal(|ui| {
            stat(ui, "Moves", self.move_count, theme::TEXT_PRIMARY);
            ui.separator();
            let built = self.last_sync.built();
            let color = if built == 0 {
                theme::STATUS_SUCCESS
            } else {
                theme::STATUS_WARNING
            };
            stat(ui, "Last update", describe_sync(&self.last_sync), color);
            ui.separator();
            stat(ui, "Total builds", self.rows.total_builds(), theme::TEXT_PRIMARY);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.checkbox(&mut self.show_build_counts, "Show builds");
            });
        });

        if let Some(error) = &self.last_error {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("{}  {}", egui_phosphor::regular::WARNING, error))
                        .size(theme::FONT_SMALL)
                        .color(theme::STATUS_WARNING),
                )
                .selectable(false),
            );
        }
        ui.add_space(theme::SPACING_SM);
    }
}

fn header_label(ui: &mut egui::Ui, title: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(title)
                .size(theme::FONT_LABEL)
                .strong()
                .color(theme::TEXT_MUTED),
        )
        .selectable(false),
    );
}
