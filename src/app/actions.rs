//! User actions on the product list

use super::App;
use crate::constants::PRICE_BUMP;
use crate::store::{ProductList, StoreError};
use crate::types::{KeyMode, MoveDirection, Product, ProductId};
use tracing::{debug, info, warn};

/// Discrete UI events. Each one is applied completely before the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListAction {
    MoveFirstDown,
    MoveLastUp,
    /// Per-row arrow buttons
    Move { index: usize, up: bool },
    BumpPrice(ProductId),
    Reset,
    SetKeyMode(KeyMode),
}

impl App {
    pub fn apply(&mut self, action: ListAction) {
        debug!(?action, "Applying list action");

        let result = match action {
            ListAction::MoveFirstDown => self.products.move_first_down(),
            ListAction::MoveLastUp => self.products.move_last_up(),
            ListAction::Move { index, up } => {
                self.products.reorder(index, MoveDirection::from_up(up))
            }
            ListAction::BumpPrice(id) => self.products.update(id, |p| Product {
                price: p.price + PRICE_BUMP,
                ..p.clone()
            }),
            ListAction::Reset => ProductList::seed(),
            ListAction::SetKeyMode(mode) => {
                self.last_error = None;
                if mode != self.key_mode {
                    info!(from = ?self.key_mode, to = ?mode, "Key mode changed");
                    self.key_mode = mode;
                    self.sync_rows();
                }
                return;
            }
        };

        match result {
            Ok(next) => self.publish(action, next),
            Err(e) => self.report(action, e),
        }
    }

    /// Replace the current list and let the row cache diff against it
    fn publish(&mut self, action: ListAction, next: ProductList) {
        self.last_error = None;
        if next.ptr_eq(&self.products) {
            debug!(?action, "No-op boundary, list unchanged");
            return;
        }

        if matches!(
            action,
            ListAction::MoveFirstDown | ListAction::MoveLastUp | ListAction::Move { .. }
        ) {
            self.move_count += 1;
        }
        if action == ListAction::Reset {
            self.move_count = 0;
        }

        self.products = next;
        self.sync_rows();
    }

    fn sync_rows(&mut self) {
        self.last_sync = self.rows.sync(&self.products, self.key_mode);
        debug!(
            reused = self.last_sync.reused,
            rebuilt = self.last_sync.rebuilt,
            inserted = self.last_sync.inserted,
            dropped = self.last_sync.dropped,
            mode = ?self.key_mode,
            "Rows synced"
        );
    }

    fn report(&mut self, action: ListAction, error: StoreError) {
        warn!(?action, error = %error, "List action rejected");
        self.last_error = Some(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::RowKey;
    use crate::settings::Settings;

    fn app() -> App {
        App::with_settings(Settings::default(), std::env::temp_dir())
    }

    fn ids(app: &App) -> Vec<u32> {
        app.products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.products.len(), 50);
        assert_eq!(app.last_sync.inserted, 50);
        assert_eq!(app.key_mode, KeyMode::Stable);
    }

    #[test]
    fn test_buttons_follow_demo_sequence() {
        let mut app = app();
        app.apply(ListAction::MoveFirstDown);
        app.apply(ListAction::MoveLastUp);

        let mut expected = vec![2, 1];
        expected.extend(3..=48);
        expected.extend([50, 49]);
        assert_eq!(ids(&app), expected);
        assert_eq!(app.move_count, 2);
        assert_eq!(app.last_sync.built(), 0);
        assert_eq!(app.rows.total_builds(), 50);
    }

    #[test]
    fn test_positional_mode_pays_for_moves() {
        let mut app = app();
        app.apply(ListAction::SetKeyMode(KeyMode::Positional));
        assert_eq!(app.rows.total_builds(), 100);

        app.apply(ListAction::MoveFirstDown);
        assert_eq!(app.last_sync.rebuilt, 2);
        assert_eq!(app.rows.build_count(RowKey::Index(0)), Some(2));
    }

    #[test]
    fn test_setting_same_mode_is_free() {
        let mut app = app();
        app.apply(ListAction::SetKeyMode(KeyMode::Stable));
        assert_eq!(app.rows.total_builds(), 50);
    }

    #[test]
    fn test_bump_price_rebuilds_one_row() {
        let mut app = app();
        app.apply(ListAction::BumpPrice(ProductId(5)));

        assert_eq!(app.last_sync.rebuilt, 1);
        let p = app.products.get(4).unwrap();
        assert_eq!(p.id, ProductId(5));
        assert!((p.price - (9.99 + 5.0 + PRICE_BUMP)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_id_is_reported_not_applied() {
        let mut app = app();
        let before = app.products.clone();
        app.apply(ListAction::BumpPrice(ProductId(999)));

        assert!(app.products.ptr_eq(&before));
        assert!(app.last_error.as_deref().unwrap().contains("999"));
    }

    #[test]
    fn test_row_move_buttons() {
        let mut app = app();
        app.apply(ListAction::Move { index: 3, up: true });
        assert_eq!(&ids(&app)[..5], &[1, 2, 4, 3, 5]);

        app.apply(ListAction::Move { index: 2, up: false });
        assert_eq!(ids(&app), (1..=50).collect::<Vec<_>>());
        assert_eq!(app.move_count, 2);
        assert_eq!(app.last_sync.built(), 0);
    }

    #[test]
    fn test_row_move_out_of_range_is_reported() {
        let mut app = app();
        let before = app.products.clone();
        app.apply(ListAction::Move { index: 50, up: true });

        assert!(app.products.ptr_eq(&before));
        assert_eq!(app.move_count, 0);
        assert!(app.last_error.as_deref().unwrap().contains("out of range"));
    }

    #[test]
    fn test_error_cleared_by_next_successful_action() {
        let successes = [
            ListAction::MoveFirstDown,
            ListAction::Move { index: 0, up: true },
            ListAction::SetKeyMode(KeyMode::Positional),
            ListAction::SetKeyMode(KeyMode::Stable),
        ];
        for action in successes {
            let mut app = app();
            app.apply(ListAction::BumpPrice(ProductId(999)));
            assert!(app.last_error.is_some());

            app.apply(action);
            assert_eq!(app.last_error, None, "{:?} left the error in place", action);
        }
    }

    #[test]
    fn test_reset_restores_seed() {
        let mut app = app();
        app.apply(ListAction::MoveFirstDown);
        app.apply(ListAction::Reset);

        assert_eq!(ids(&app), (1..=50).collect::<Vec<_>>());
        assert_eq!(app.move_count, 0);
        assert_eq!(app.last_sync.built(), 0);
    }

    #[test]
    fn test_settings_snapshot_carries_mode() {
        let mut app = app();
        app.apply(ListAction::SetKeyMode(KeyMode::Positional));
        app.show_build_counts = false;

        let settings = app.settings();
        assert_eq!(settings.key_mode, KeyMode::Positional);
        assert!(!settings.show_build_counts);
    }
}
