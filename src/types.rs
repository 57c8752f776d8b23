//! Common types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Permanent identity of a product. Assigned once, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Immutable product record. Equality is structural; rendering identity is `id` only.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
        }
    }
}

/// Direction of a single-slot move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Toward the front (index - 1)
    Up,
    /// Toward the back (index + 1)
    Down,
}

impl MoveDirection {
    pub fn from_up(up: bool) -> Self {
        if up {
            Self::Up
        } else {
            Self::Down
        }
    }
}

/// How rows are keyed when matched across list replacements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMode {
    /// Key = product id; rows follow their product
    #[default]
    Stable,
    /// Key = row position; a move changes the content under two keys
    Positional,
}

impl KeyMode {
    pub fn label(self) -> &'static str {
        match self {
            KeyMode::Stable => "Keyed by id",
            KeyMode::Positional => "Keyed by index",
        }
    }
}
