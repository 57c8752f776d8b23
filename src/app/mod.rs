//! App module - contains the main application state and logic

mod actions;
mod views;

pub use actions::ListAction;

use crate::rows::{RowCache, SyncStats};
use crate::settings::Settings;
use crate::store::ProductList;
use crate::theme;
use crate::types::KeyMode;
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, error};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Current sequence; replaced wholesale on every change
    pub(crate) products: ProductList,
    pub(crate) rows: RowCache,
    pub(crate) key_mode: KeyMode,
    pub(crate) show_build_counts: bool,
    // Demo stats
    pub(crate) last_sync: SyncStats,
    pub(crate) move_count: u32,
    pub(crate) last_error: Option<String>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self::with_settings(settings, data_dir)
    }

    /// State without any egui context attached
    pub fn with_settings(settings: Settings, data_dir: PathBuf) -> Self {
        let (products, last_error) = match ProductList::seed() {
            Ok(list) => (list, None),
            Err(e) => {
                error!(error = %e, "Failed to seed products");
                (ProductList::default(), Some(e.to_string()))
            }
        };
        let mut rows = RowCache::new();
        let last_sync = rows.sync(&products, settings.key_mode);
        debug!(rows = rows.row_count(), mode = ?settings.key_mode, "Initial rows built");

        Self {
            products,
            rows,
            key_mode: settings.key_mode,
            show_build_counts: settings.show_build_counts,
            last_sync,
            move_count: 0,
            last_error,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            key_mode: self.key_mode,
            show_build_counts: self.show_build_counts,
        }
    }

    pub fn save_settings(&self) {
        self.settings().save(&self.data_dir);
    }
}
