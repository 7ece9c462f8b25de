//! # Metrics Trait Hierarchy
//!
//! ```text
//!   ┌─────────────────────────────┐
//!   │     GridMetricsRecorder     │   written by GridCore under the page lock
//!   │  insert/dedup/evict/rebuild │
//!   └──────────────┬──────────────┘
//!                  │
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! Counters touched on shared-lock paths (snapshot hits, persistence) live as
//! atomics on the page and are merged into the snapshot.

/// Counters recorded while the grid is exclusively locked.
pub trait GridMetricsRecorder {
    fn record_insert_front(&mut self);
    fn record_insert_back(&mut self);
    fn record_duplicates_removed(&mut self, count: usize);
    fn record_evictions(&mut self, count: usize);
    fn record_snapshot_rebuild(&mut self);
    fn record_snapshot_hit(&mut self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
