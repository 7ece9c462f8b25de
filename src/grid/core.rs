//! Single-threaded grid core.
//!
//! ## Insert Flow
//!
//! ```text
//!   insert(item, end)
//!        │
//!        ▼
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │ 1. drop cached snapshot                                      │
//!   │ 2. remove every member equivalent to item                    │
//!   │ 3. push at front or back                                     │
//!   │ 4. evict from back while len > max_count                     │
//!   │ 5. reposition every member: index i → layout.position(i)     │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every path that changes the order drops the snapshot; [`GridCore::snapshot`]
//! rebuilds it lazily.
use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::ds::bounded_deque::{BoundedDeque, End};
use crate::error::{ConfigError, InvariantError};
use crate::grid::snapshot::GridSnapshot;
use crate::item::{Item, PositionedItem};
use crate::layout::GridLayout;
#[cfg(feature = "metrics")]
use crate::metrics::{GridMetrics, GridMetricsRecorder};

/// What a single insert did to the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InsertSummary {
    /// Equivalent members removed before the push.
    pub duplicates_removed: usize,
    /// Members evicted from the back.
    pub evicted: usize,
}

/// Bounded, deduplicating, positioned order of items.
#[derive(Debug)]
pub struct GridCore {
    order: BoundedDeque<PositionedItem>,
    layout: GridLayout,
    cached: Option<GridSnapshot>,
    #[cfg(feature = "metrics")]
    metrics: GridMetrics,
}

impl GridCore {
    /// Creates an empty core holding at most `max_count` items.
    ///
    /// # Panics
    ///
    /// Panics if a cell within `max_count` has coordinates outside `i32`.
    /// For a non-panicking alternative, use [`try_new`](Self::try_new).
    pub fn new(layout: GridLayout, max_count: usize) -> Self {
        match Self::try_new(layout, max_count) {
            Ok(core) => core,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates an empty core, returning an error if `max_count` cells do not
    /// fit the layout's coordinate range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] from [`GridLayout::check_capacity`].
    pub fn try_new(layout: GridLayout, max_count: usize) -> Result<Self, ConfigError> {
        layout.check_capacity(max_count)?;
        Ok(Self {
            order: BoundedDeque::new(max_count),
            layout,
            cached: None,
            #[cfg(feature = "metrics")]
            metrics: GridMetrics::default(),
        })
    }

    #[inline]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[inline]
    pub fn max_count(&self) -> usize {
        self.order.capacity()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Front-to-back iterator over the live order.
    pub fn iter(&self) -> impl Iterator<Item = &PositionedItem> {
        self.order.iter()
    }

    /// Codes of the members, front first.
    pub fn codes(&self) -> Vec<i32> {
        self.order.iter().map(PositionedItem::code).collect()
    }

    /// Inserts `item` at `end`, replacing any equivalent member.
    pub fn insert(&mut self, item: impl Into<Arc<Item>>, end: End) -> InsertSummary {
        self.cached = None;

        let item = item.into();
        let outcome = self.order.insert(PositionedItem::new(Arc::clone(&item)), end, |member| {
            member.item().is_equivalent(&item)
        });
        self.reposition();

        #[cfg(feature = "metrics")]
        {
            match end {
                End::Front => self.metrics.record_insert_front(),
                End::Back => self.metrics.record_insert_back(),
            }
            self.metrics.record_duplicates_removed(outcome.removed);
            self.metrics.record_evictions(outcome.evicted.len());
        }

        InsertSummary {
            duplicates_removed: outcome.removed,
            evicted: outcome.evicted.len(),
        }
    }

    fn reposition(&mut self) {
        let layout = self.layout;
        for (index, member) in self.order.iter_mut().enumerate() {
            let (x, y) = layout.position(index);
            member.move_to(x, y);
        }
    }

    /// Returns the cached snapshot, if one is current.
    pub fn cached_snapshot(&self) -> Option<GridSnapshot> {
        self.cached.clone()
    }

    /// Returns the current snapshot, rebuilding it if an insert dropped it.
    pub fn snapshot(&mut self) -> GridSnapshot {
        if let Some(cached) = &self.cached {
            #[cfg(feature = "metrics")]
            self.metrics.record_snapshot_hit();
            return cached.clone();
        }
        let snapshot = GridSnapshot::from_items(self.order.iter());
        self.cached = Some(snapshot.clone());
        #[cfg(feature = "metrics")]
        self.metrics.record_snapshot_rebuild();
        snapshot
    }

    /// Returns the core's counters.
    #[cfg(feature = "metrics")]
    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    /// Resets the core's counters to zero.
    #[cfg(feature = "metrics")]
    pub fn reset_metrics(&mut self) {
        self.metrics = GridMetrics::default();
    }

    /// Checks size bound, uniqueness, positions and snapshot coherence.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.order.len() > self.order.capacity() {
            return Err(InvariantError::new(format!(
                "len {} exceeds max_count {}",
                self.order.len(),
                self.order.capacity()
            )));
        }

        let mut seen = FxHashSet::default();
        for (index, member) in self.order.iter().enumerate() {
            if !seen.insert(member.item().key()) {
                return Err(InvariantError::new(format!(
                    "duplicate member {} at index {}",
                    member, index
                )));
            }
            let expected = self.layout.position(index);
            if (member.x(), member.y()) != expected {
                return Err(InvariantError::new(format!(
                    "member at index {} is at ({}, {}), expected {:?}",
                    index,
                    member.x(),
                    member.y(),
                    expected
                )));
            }
        }

        if let Some(cached) = &self.cached
            && !cached.iter().eq(self.order.iter())
        {
            return Err(InvariantError::new("cached snapshot diverges from order"));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("grid invariant violated: {err}");
        }
        self.order.debug_validate_invariants();
    }
}
