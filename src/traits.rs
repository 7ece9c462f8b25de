//! # Grid Trait Seams
//!
//! Capabilities the surrounding keyboard/view layer consumes from a grid page,
//! and the lookup seam used when restoring persisted recents.
//!
//! ```text
//!   ┌─────────────────────────────┐        ┌─────────────────────────────┐
//!   │        KeyboardGrid         │        │        LookupSource         │
//!   │  keys() → GridSnapshot      │        │  lookup(code) → Option<Item>│
//!   │  nearest_keys(x, y)         │        └──────────────┬──────────────┘
//!   │  find_key(code)             │                       │
//!   └──────────────┬──────────────┘          implemented by GridPage,
//!                  │                          [Item], Vec<Item>, &T
//!        implemented by GridPage
//! ```
//!
//! A grid page holds no reference to any keyboard base type; whatever renders
//! the grid reads positioned items through [`KeyboardGrid`].

use crate::grid::GridSnapshot;
use crate::item::{Item, PositionedItem};

/// Read capability of a positioned grid.
pub trait KeyboardGrid {
    /// Current positioned items, front of the order first.
    ///
    /// The returned snapshot never changes after it is returned.
    fn keys(&self) -> GridSnapshot;

    /// Candidate keys near `(x, y)`.
    ///
    /// Grid pages return the full snapshot; no spatial filtering is done.
    fn nearest_keys(&self, _x: i32, _y: i32) -> GridSnapshot {
        self.keys()
    }

    /// First positioned item with `code`, front to back.
    fn find_key(&self, code: i32) -> Option<PositionedItem> {
        self.keys().iter().find(|key| key.code() == code).cloned()
    }
}

/// Resolves a persisted code back into a full item.
pub trait LookupSource {
    /// Returns the item this source knows for `code`, if any.
    fn lookup(&self, code: i32) -> Option<Item>;
}

impl LookupSource for [Item] {
    fn lookup(&self, code: i32) -> Option<Item> {
        self.iter().find(|item| item.code() == code).cloned()
    }
}

impl LookupSource for Vec<Item> {
    fn lookup(&self, code: i32) -> Option<Item> {
        self.as_slice().lookup(code)
    }
}

impl<T: LookupSource + ?Sized> LookupSource for &T {
    fn lookup(&self, code: i32) -> Option<Item> {
        (**self).lookup(code)
    }
}

impl<T: LookupSource + ?Sized> LookupSource for std::sync::Arc<T> {
    fn lookup(&self, code: i32) -> Option<Item> {
        (**self).lookup(code)
    }
}
