#![windows_subsystem = "windows"]
//! List Performance Demo - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod rows;
mod settings;
mod store;
mod theme;
mod types;
mod ui;
mod utils;

use app::{App, ListAction};
use constants::*;
use eframe::egui;
use tracing::info;
use utils::get_data_dir;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "List Performance Demo starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::Vec2::from(theme::WINDOW_SIZE)))
        .with_min_inner_size(theme::WINDOW_MIN_SIZE)
        .with_title(APP_NAME);

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Actions are collected during rendering and applied after, in order
        let mut pending: Vec<ListAction> = Vec::new();

        // Keyboard shortcuts (when no text field wants input)
        if !ctx.wants_keyboard_input() {
            ctx.input(|i| {
                if i.key_pressed(egui::Key::ArrowDown) {
                    pending.push(ListAction::MoveFirstDown);
                }
                if i.key_pressed(egui::Key::ArrowUp) {
                    pending.push(ListAction::MoveLastUp);
                }
            });
        }

        egui::TopBottomPanel::top("header_panel")
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(theme::SPACING_XL as i8, 0)),
            )
            .show(ctx, |ui| {
                if let Some(action) = self.render_header(ui) {
                    pending.push(action);
                }
            });

        egui::TopBottomPanel::bottom("stats_panel")
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(theme::SPACING_XL as i8, 4)),
            )
            .show(ctx, |ui| {
                self.render_stats(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                theme::list_frame().show(ui, |ui| {
                    ui.set_min_size(ui.available_size());
                    if let Some(action) = self.render_product_list(ui) {
                        pending.push(action);
                    }
                });
            });

        if !pending.is_empty() {
            for action in pending {
                self.apply(action);
            }
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}
