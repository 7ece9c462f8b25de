//! Thread-safe grid page.
//!
//! ## Locking
//!
//! ```text
//!   GridPage
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │ core: RwLock<GridCore>   order + snapshot cache, one unit    │
//!   │ settings: Option<Arc<dyn SettingsStore>>                     │
//!   └──────────────────────────────────────────────────────────────┘
//!
//!   insert:   write lock ─► dedup/push/evict/reposition ─► copy codes ─► unlock
//!             └─► (recents + front) write codes to settings, lock NOT held
//!
//!   snapshot: read lock ─► cached? return it
//!             write lock ─► rebuild if still absent ─► return it
//! ```
//!
//! Two racing front inserts may persist out of commit order. The stored value
//! is then a stale but complete order, never a torn one.
use std::sync::Arc;
#[cfg(feature = "metrics")]
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::builder::GridPageBuilder;
use crate::ds::bounded_deque::End;
use crate::error::{ConfigError, InvariantError};
use crate::grid::core::{GridCore, InsertSummary};
use crate::grid::snapshot::GridSnapshot;
use crate::item::Item;
use crate::layout::{GridLayout, LayoutMetrics};
#[cfg(feature = "metrics")]
use crate::metrics::{GridMetricsSnapshot, MetricsReset, MetricsSnapshotProvider};
use crate::persist::{self, MalformedTokenPolicy, RestoreReport};
use crate::store::traits::SettingsStore;
use crate::traits::{KeyboardGrid, LookupSource};

/// Counters touched without the write lock.
#[cfg(feature = "metrics")]
#[derive(Debug, Default)]
struct PageCounters {
    snapshot_hits: AtomicU64,
    persist_writes: AtomicU64,
    restore_calls: AtomicU64,
    restored_items: AtomicU64,
    unresolved_codes: AtomicU64,
    malformed_tokens: AtomicU64,
}

/// One bounded, independently laid-out grid of items.
///
/// # Example
///
/// ```
/// use gridkit::grid::GridPage;
/// use gridkit::item::Item;
/// use gridkit::layout::{LayoutMetrics, TEMPLATE_CODE_0, TEMPLATE_CODE_1};
///
/// let template = [
///     Item::new(TEMPLATE_CODE_0, 40, 30).at(0, 0),
///     Item::new(TEMPLATE_CODE_1, 40, 30).at(40, 0),
/// ];
/// let page = GridPage::new(&template, LayoutMetrics::new(120, 0, 0), 3);
///
/// for code in [1, 2, 3, 4] {
///     page.insert_recent(Item::new(code, 40, 30));
/// }
/// assert_eq!(page.codes(), [4, 3, 2]);
///
/// let keys = page.snapshot();
/// assert_eq!((keys[2].x(), keys[2].y()), (80, 0));
/// ```
pub struct GridPage {
    core: RwLock<GridCore>,
    is_recents: bool,
    settings: Option<Arc<dyn SettingsStore>>,
    malformed_policy: MalformedTokenPolicy,
    #[cfg(feature = "metrics")]
    counters: PageCounters,
}

impl GridPage {
    /// Creates a plain (non-recents) page.
    ///
    /// # Panics
    ///
    /// Panics if the template lacks an anchor key or `max_count` cells do
    /// not fit in `i32` coordinates. For a non-panicking alternative, use
    /// [`try_new`](Self::try_new).
    pub fn new(template: &[Item], metrics: LayoutMetrics, max_count: usize) -> Self {
        match Self::try_new(template, metrics, max_count) {
            Ok(page) => page,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a plain (non-recents) page, returning an error on invalid
    /// configuration instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the layout cannot be derived from `template`
    /// or cannot place `max_count` items.
    pub fn try_new(
        template: &[Item],
        metrics: LayoutMetrics,
        max_count: usize,
    ) -> Result<Self, ConfigError> {
        let layout = GridLayout::from_template(template, metrics)?;
        Ok(Self::from_parts(
            GridCore::try_new(layout, max_count)?,
            false,
            None,
            MalformedTokenPolicy::default(),
        ))
    }

    /// Returns a builder for configuring a page.
    pub fn builder(max_count: usize) -> GridPageBuilder {
        GridPageBuilder::new(max_count)
    }

    pub(crate) fn from_parts(
        core: GridCore,
        is_recents: bool,
        settings: Option<Arc<dyn SettingsStore>>,
        malformed_policy: MalformedTokenPolicy,
    ) -> Self {
        Self {
            core: RwLock::new(core),
            is_recents,
            settings,
            malformed_policy,
            #[cfg(feature = "metrics")]
            counters: PageCounters::default(),
        }
    }

    /// Inserts `item` at `end`, replacing any equivalent member.
    ///
    /// On a recents page a front insert also persists the new order. The
    /// store write happens after the lock is released.
    pub fn insert(&self, item: impl Into<Arc<Item>>, end: End) -> InsertSummary {
        let (summary, to_persist) = {
            let mut core = self.core.write();
            let summary = core.insert(item, end);
            trace!(
                ?end,
                len = core.len(),
                duplicates = summary.duplicates_removed,
                evicted = summary.evicted,
                "grid insert"
            );
            let to_persist = (self.is_recents && end == End::Front).then(|| core.codes());
            (summary, to_persist)
        };

        if summary.evicted > 0 {
            debug!(evicted = summary.evicted, "evicted grid items over capacity");
        }
        if let Some(codes) = to_persist {
            self.persist(&codes);
        }
        summary
    }

    /// Inserts at the front; persists when this is a recents page.
    pub fn insert_recent(&self, item: impl Into<Arc<Item>>) -> InsertSummary {
        self.insert(item, End::Front)
    }

    /// Inserts at the back without persisting.
    pub fn insert_silent(&self, item: impl Into<Arc<Item>>) -> InsertSummary {
        self.insert(item, End::Back)
    }

    /// Returns the positioned items, front first.
    ///
    /// Repeated calls with no insert in between return the same snapshot.
    pub fn snapshot(&self) -> GridSnapshot {
        let cached = self.core.read().cached_snapshot();
        if let Some(cached) = cached {
            #[cfg(feature = "metrics")]
            self.counters.snapshot_hits.fetch_add(1, Ordering::Relaxed);
            return cached;
        }
        self.core.write().snapshot()
    }

    /// Returns the full snapshot; no spatial filtering is performed.
    pub fn nearest_to(&self, _x: i32, _y: i32) -> GridSnapshot {
        self.snapshot()
    }

    /// Codes of the members, front first.
    pub fn codes(&self) -> Vec<i32> {
        self.core.read().codes()
    }

    pub fn len(&self) -> usize {
        self.core.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.read().is_empty()
    }

    pub fn max_count(&self) -> usize {
        self.core.read().max_count()
    }

    pub fn layout(&self) -> GridLayout {
        *self.core.read().layout()
    }

    /// Returns `true` if this page persists its order.
    pub fn is_recents(&self) -> bool {
        self.is_recents
    }

    /// Writes the current order to the settings store, if one is configured.
    pub fn save_recent_keys(&self) {
        let codes = self.codes();
        self.persist(&codes);
    }

    /// Restores the stored order through `sources`, first match winning.
    ///
    /// Without a settings store this is a no-op.
    pub fn load_recent_keys(&self, sources: &[&dyn LookupSource]) -> RestoreReport {
        let Some(store) = &self.settings else {
            debug!("load_recent_keys on a page without settings store");
            return RestoreReport::default();
        };
        let report = persist::load_recent_keys(self, sources, store.as_ref(), self.malformed_policy);

        #[cfg(feature = "metrics")]
        {
            self.counters.restore_calls.fetch_add(1, Ordering::Relaxed);
            self.counters
                .restored_items
                .fetch_add(report.restored as u64, Ordering::Relaxed);
            self.counters
                .unresolved_codes
                .fetch_add(report.unresolved as u64, Ordering::Relaxed);
            self.counters
                .malformed_tokens
                .fetch_add(report.malformed as u64, Ordering::Relaxed);
        }
        report
    }

    fn persist(&self, codes: &[i32]) {
        if let Some(store) = &self.settings {
            persist::save_recent_keys(store.as_ref(), codes);
            #[cfg(feature = "metrics")]
            self.counters.persist_writes.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Checks the core's invariants under the read lock.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.core.read().check_invariants()
    }

    /// Returns a point-in-time view of the page's counters.
    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> GridMetricsSnapshot {
        let core = self.core.read();
        let m = core.metrics();
        GridMetricsSnapshot {
            insert_front_calls: m.insert_front_calls,
            insert_back_calls: m.insert_back_calls,
            duplicates_removed: m.duplicates_removed,
            evicted_entries: m.evicted_entries,
            snapshot_hits: m.snapshot_hits + self.counters.snapshot_hits.load(Ordering::Relaxed),
            snapshot_rebuilds: m.snapshot_rebuilds,
            persist_writes: self.counters.persist_writes.load(Ordering::Relaxed),
            restore_calls: self.counters.restore_calls.load(Ordering::Relaxed),
            restored_items: self.counters.restored_items.load(Ordering::Relaxed),
            unresolved_codes: self.counters.unresolved_codes.load(Ordering::Relaxed),
            malformed_tokens: self.counters.malformed_tokens.load(Ordering::Relaxed),
            len: core.len(),
            max_count: core.max_count(),
        }
    }
}

impl std::fmt::Debug for GridPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridPage")
            .field("core", &self.core)
            .field("is_recents", &self.is_recents)
            .field("has_settings", &self.settings.is_some())
            .field("malformed_policy", &self.malformed_policy)
            .finish_non_exhaustive()
    }
}

impl KeyboardGrid for GridPage {
    fn keys(&self) -> GridSnapshot {
        self.snapshot()
    }

    fn nearest_keys(&self, x: i32, y: i32) -> GridSnapshot {
        self.nearest_to(x, y)
    }
}

impl LookupSource for GridPage {
    fn lookup(&self, code: i32) -> Option<Item> {
        self.find_key(code).map(|key| key.item().clone())
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<GridMetricsSnapshot> for GridPage {
    fn snapshot(&self) -> GridMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl MetricsReset for GridPage {
    fn reset_metrics(&self) {
        self.core.write().reset_metrics();
        let c = &self.counters;
        for counter in [
            &c.snapshot_hits,
            &c.persist_writes,
            &c.restore_calls,
            &c.restored_items,
            &c.unresolved_codes,
            &c.malformed_tokens,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}
