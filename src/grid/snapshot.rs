use std::ops::Deref;
use std::sync::Arc;

use crate::item::PositionedItem;

/// Immutable, cheaply clonable view of a grid's positioned items.
///
/// A snapshot is a copy: later inserts into the grid never change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot(Arc<[PositionedItem]>);

impl GridSnapshot {
    pub(crate) fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a PositionedItem>,
    {
        Self(items.into_iter().cloned().collect())
    }

    /// Returns `true` if both snapshots share the same allocation.
    pub fn ptr_eq(&self, other: &GridSnapshot) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Codes of the items, front first.
    pub fn codes(&self) -> Vec<i32> {
        self.0.iter().map(PositionedItem::code).collect()
    }

    pub fn as_slice(&self) -> &[PositionedItem] {
        &self.0
    }
}

impl Default for GridSnapshot {
    fn default() -> Self {
        Self(Arc::from(Vec::new()))
    }
}

impl Deref for GridSnapshot {
    type Target = [PositionedItem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a GridSnapshot {
    type Item = &'a PositionedItem;
    type IntoIter = std::slice::Iter<'a, PositionedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
