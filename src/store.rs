//! Product store for List Performance Demo
//! Holds the ordered, copy-on-write product sequence and the reorder operation

use crate::constants::{SEED_BASE_PRICE, SEED_COUNT};
use crate::types::{MoveDirection, Product, ProductId};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Errors from store operations. None of them leave a partially built list behind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("index {index} out of range for list of {len} products")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    #[error("no product with id {0}")]
    UnknownId(ProductId),
}

/// Ordered product sequence. Every mutation returns a new list; the old one is untouched.
#[derive(Debug, Clone)]
pub struct ProductList {
    items: Arc<[Product]>,
}

impl PartialEq for ProductList {
    fn eq(&self, other: &Self) -> bool {
        self.items[..] == other.items[..]
    }
}

impl Default for ProductList {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl ProductList {
    /// The fixed startup set: ids 1..=50, "Product {id}", price 9.99 + id
    pub fn seed() -> Result<Self, StoreError> {
        let items: Vec<Product> = (1..=SEED_COUNT)
            .map(|id| Product::new(id, format!("Product {}", id), SEED_BASE_PRICE + id as f64))
            .collect();
        let list = Self::from_products(items)?;
        debug!(count = list.len(), "Product list seeded");
        Ok(list)
    }

    /// Build a list from arbitrary products, rejecting duplicate ids
    pub fn from_products(products: Vec<Product>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(products.len());
        for p in &products {
            if !seen.insert(p.id) {
                return Err(StoreError::DuplicateId(p.id));
            }
        }
        Ok(Self {
            items: products.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.items.iter()
    }

    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|p| p.id == id)
    }

    /// True if both lists share the same allocation (i.e. a no-op mutation)
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Move the product at `index` one slot in `direction`.
    ///
    /// Moving the first product up or the last product down is a no-op and returns
    /// a list sharing this one's storage. An out-of-range index is rejected.
    pub fn reorder(&self, index: usize, direction: MoveDirection) -> Result<Self, StoreError> {
        let len = self.items.len();
        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }

        let target = match direction {
            MoveDirection::Up if index == 0 => return Ok(self.clone()),
            MoveDirection::Up => index - 1,
            MoveDirection::Down if index == len - 1 => return Ok(self.clone()),
            MoveDirection::Down => index + 1,
        };

        let mut items = self.items.to_vec();
        let item = items.remove(index);
        items.insert(target, item);
        Ok(Self {
            items: items.into(),
        })
    }

    /// "Move First Item Down". No-op on an empty list.
    pub fn move_first_down(&self) -> Result<Self, StoreError> {
        if self.is_empty() {
            return Ok(self.clone());
        }
        self.reorder(0, MoveDirection::Down)
    }

    /// "Move Last Item Up". No-op on an empty list.
    pub fn move_last_up(&self) -> Result<Self, StoreError> {
        match self.items.len().checked_sub(1) {
            Some(last) => self.reorder(last, MoveDirection::Up),
            None => Ok(self.clone()),
        }
    }

    /// Replace the content of product `id` with `f(&product)`. The id itself never changes.
    pub fn update<F>(&self, id: ProductId, f: F) -> Result<Self, StoreError>
    where
        F: FnOnce(&Product) -> Product,
    {
        let index = self.position(id).ok_or(StoreError::UnknownId(id))?;
        let mut items = self.items.to_vec();
        let mut updated = f(&items[index]);
        updated.id = id;
        items[index] = updated;
        Ok(Self {
            items: items.into(),
        })
    }
}
