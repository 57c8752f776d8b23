//! Keyed row cache
//!
//! egui redraws everything each frame, so the "rebuild a row" cost that a retained
//! list renderer pays is modelled here: each row is cached under a [`RowKey`] and
//! only rebuilt when its key is new or the content under the key changed.

use crate::store::ProductList;
use crate::types::{KeyMode, Product, ProductId};
use std::collections::HashMap;

/// Key used to match a row across list replacements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(ProductId),
    Index(usize),
}

impl RowKey {
    pub fn for_row(mode: KeyMode, index: usize, product: &Product) -> Self {
        match mode {
            KeyMode::Stable => RowKey::Id(product.id),
            KeyMode::Positional => RowKey::Index(index),
        }
    }
}

/// Outcome of one [`RowCache::sync`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub reused: usize,
    pub rebuilt: usize,
    pub inserted: usize,
    pub dropped: usize,
}

impl SyncStats {
    /// Rows that paid a build this sync
    pub fn built(&self) -> usize {
        self.rebuilt + self.inserted
    }
}

struct RowEntry {
    content: Product,
    builds: u32,
}

#[derive(Default)]
pub struct RowCache {
    rows: HashMap<RowKey, RowEntry>,
    mode: Option<KeyMode>,
    total_builds: u64,
}

impl RowCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match every product in `list` against the cached rows.
    /// Switching `mode` discards the cache, so every row is built again.
    pub fn sync(&mut self, list: &ProductList, mode: KeyMode) -> SyncStats {
        let mut stats = SyncStats::default();

        if self.mode != Some(mode) {
            stats.dropped += self.rows.len();
            self.rows.clear();
            self.mode = Some(mode);
        }

        let mut next = HashMap::with_capacity(list.len());
        for (index, product) in list.iter().enumerate() {
            let key = RowKey::for_row(mode, index, product);
            let entry = match self.rows.remove(&key) {
                Some(entry) if entry.content == *product => {
                    stats.reused += 1;
                    entry
                }
                Some(entry) => {
                    stats.rebuilt += 1;
                    RowEntry {
                        content: product.clone(),
                        builds: entry.builds + 1,
                    }
                }
                None => {
                    stats.inserted += 1;
                    RowEntry {
                        content: product.clone(),
                        builds: 1,
                    }
                }
            };
            next.insert(key, entry);
        }

        stats.dropped += self.rows.len();
        self.rows = next;
        self.total_builds += stats.built() as u64;
        stats
    }

    /// How many times the row under `key` has been built, if it is cached
    pub fn build_count(&self, key: RowKey) -> Option<u32> {
        self.rows.get(&key).map(|e| e.builds)
    }

    /// Builds over the cache lifetime, including rows since dropped
    pub fn total_builds(&self) -> u64 {
        self.total_builds
    }

    /// Rows currently cached
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MoveDirection;

    fn warm(mode: KeyMode) -> (RowCache, ProductList) {
        let list = ProductList::seed().unwrap();
        let mut cache = RowCache::new();
        let first = cache.sync(&list, mode);
        assert_eq!(first.inserted, 50);
        (cache, list)
    }

    #[test]
    fn test_resync_same_list_reuses_everything() {
        let (mut cache, list) = warm(KeyMode::Stable);
        let stats = cache.sync(&list, KeyMode::Stable);
        assert_eq!(
            stats,
            SyncStats {
                reused: 50,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_stable_keys_survive_reorder() {
        let (mut cache, list) = warm(KeyMode::Stable);

        let moved = list.move_first_down().unwrap().move_last_up().unwrap();
        let stats = cache.sync(&moved, KeyMode::Stable);

        assert_eq!(stats.reused, 50);
        assert_eq!(stats.built(), 0);
        assert_eq!(stats.dropped, 0);
        assert_eq!(cache.build_count(RowKey::Id(ProductId(1))), Some(1));
        assert_eq!(cache.total_builds(), 50);
    }

    #[test]
    fn test_positional_keys_rebuild_moved_rows() {
        let (mut cache, list) = warm(KeyMode::Positional);

        let moved = list.move_first_down().unwrap();
        let stats = cache.sync(&moved, KeyMode::Positional);

        assert_eq!(stats.rebuilt, 2);
        assert_eq!(stats.reused, 48);
        assert_eq!(cache.build_count(RowKey::Index(0)), Some(2));
        assert_eq!(cache.build_count(RowKey::Index(1)), Some(2));
        assert_eq!(cache.build_count(RowKey::Index(2)), Some(1));
    }

    #[test]
    fn test_no_op_move_builds_nothing_in_either_mode() {
        for mode in [KeyMode::Stable, KeyMode::Positional] {
            let (mut cache, list) = warm(mode);
            let same = list
                .reorder(0, MoveDirection::Up)
                .unwrap()
                .reorder(49, MoveDirection::Down)
                .unwrap();
            assert!(same.ptr_eq(&list));
            let stats = cache.sync(&same, mode);
            assert_eq!(stats.built(), 0, "mode {:?}", mode);
        }
    }

    #[test]
    fn test_content_update_rebuilds_one_row() {
        let (mut cache, list) = warm(KeyMode::Stable);

        let updated = list
            .update(ProductId(10), |p| Product {
                price: p.price + 1.0,
                ..p.clone()
            })
            .unwrap();
        let stats = cache.sync(&updated, KeyMode::Stable);

        assert_eq!(stats.rebuilt, 1);
        assert_eq!(stats.reused, 49);
        assert_eq!(cache.build_count(RowKey::Id(ProductId(10))), Some(2));
    }

    #[test]
    fn test_mode_switch_rebuilds_all() {
        let (mut cache, list) = warm(KeyMode::Stable);
        let stats = cache.sync(&list, KeyMode::Positional);

        assert_eq!(stats.inserted, 50);
        assert_eq!(stats.dropped, 50);
        assert_eq!(cache.build_count(RowKey::Index(0)), Some(1));
        assert_eq!(cache.build_count(RowKey::Id(ProductId(1))), None);
        assert_eq!(cache.total_builds(), 100);
    }

    #[test]
    fn test_removed_rows_are_dropped() {
        let (mut cache, list) = warm(KeyMode::Stable);
        let shorter = ProductList::from_products(list.iter().take(45).cloned().collect()).unwrap();

        let stats = cache.sync(&shorter, KeyMode::Stable);
        assert_eq!(stats.dropped, 5);
        assert_eq!(cache.row_count(), 45);
        assert_eq!(cache.build_count(RowKey::Id(ProductId(50))), None);
    }
}
