//! Centralized theme constants for List Performance Demo
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0xf0, 0xf4, 0xf8); // screen background
pub const BG_ELEVATED: Color32 = Color32::WHITE;
pub const BG_SURFACE: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0); // slate-200
pub const BG_LIST: Color32 = Color32::from_rgba_premultiplied(0xd3, 0xd3, 0xd3, 0x33); // light gray 20%
pub const BG_HOVER: Color32 = Color32::from_rgb(0xe6, 0xf4, 0xf1); // subtle teal hover

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x0d, 0x94, 0x88); // teal-600
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(0xcc, 0xfb, 0xf1); // teal-100

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a); // slate-900
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x33, 0x41, 0x55); // slate-700
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b); // slate-500
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8); // slate-400

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0); // slate-200
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0xcb, 0xd5, 0xe1); // slate-300

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x05, 0x96, 0x69); // emerald-600
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xd9, 0x77, 0x06); // amber-600

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0); // slate-200
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x0d, 0x94, 0x88); // teal-600

// =============================================================================
// COLORS - Toggle
// =============================================================================
pub const TOGGLE_SELECTED: Color32 = Color32::from_rgb(0x0d, 0x94, 0x88);
pub const TOGGLE_UNSELECTED: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0);

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 24.0; // headlineMedium-ish
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const ROW_HEIGHT: f32 = 44.0;
pub const HEADER_HEIGHT: f32 = 32.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const BADGE_WIDTH: f32 = 48.0;
pub const BADGE_HEIGHT: f32 = 20.0;
pub const WINDOW_SIZE: [f32; 2] = [560.0, 760.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [420.0, 480.0];

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 12.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_ELEVATED,
        faint_bg_color: BG_SURFACE,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: ACCENT_LIGHT,
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: BTN_DEFAULT,
                weak_bg_fill: BTN_DEFAULT,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: lighten(BTN_DEFAULT, 0.4),
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            ..egui::style::Widgets::light()
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - List container frame
// =============================================================================
pub fn list_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_LIST)
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_MD as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default slate button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_SECONDARY))
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Accent teal button (for the move actions)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(Color32::WHITE))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

// =============================================================================
// HELPER - Segmented toggle (pill-style)
// =============================================================================

/// Renders a segmented toggle with two options. Returns true if selection changed.
/// `left_active` indicates if the left option is currently selected.
pub fn segmented_toggle(
    ui: &mut egui::Ui,
    left_label: &str,
    right_label: &str,
    left_active: &mut bool,
) -> bool {
    let mut changed = false;
    let height = 26.0;
    let font_size = FONT_SMALL;
    let rounding = RADIUS_DEFAULT;
    let segment_width = 104.0;

    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(segment_width * 2.0, height), egui::Sense::click());
    let painter = ui.painter();

    painter.rect_filled(rect, rounding + 2.0, TOGGLE_UNSELECTED);

    let left_rect =
        egui::Rect::from_min_max(rect.min, egui::pos2(rect.min.x + segment_width, rect.max.y));
    let right_rect =
        egui::Rect::from_min_max(egui::pos2(rect.min.x + segment_width, rect.min.y), rect.max);
    let active_rect = if *left_active { left_rect } else { right_rect };
    painter.rect_filled(active_rect.shrink(2.0), rounding, TOGGLE_SELECTED);

    let (left_color, right_color) = if *left_active {
        (Color32::WHITE, TEXT_MUTED)
    } else {
        (TEXT_MUTED, Color32::WHITE)
    };
    painter.text(
        left_rect.center(),
        egui::Align2::CENTER_CENTER,
        left_label,
        egui::FontId::proportional(font_size),
        left_color,
    );
    painter.text(
        right_rect.center(),
        egui::Align2::CENTER_CENTER,
        right_label,
        egui::FontId::proportional(font_size),
        right_color,
    );

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let clicked_left = pos.x < rect.min.x + segment_width;
            if clicked_left != *left_active {
                *left_active = clicked_left;
                changed = true;
            }
        }
    }
    changed
}
