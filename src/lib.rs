//! gridkit: bounded recency grids with deterministic layout and persisted history.
//!
//! A [`GridPage`](grid::GridPage) keeps at most `max_count` items in a
//! deduplicated order, lays every member out on a fixed-column grid after
//! each insert, and hands readers cached immutable snapshots. A recents page
//! also writes its order to a [`SettingsStore`](store::SettingsStore) and can
//! rebuild it later through [`LookupSource`](traits::LookupSource)s.

pub mod builder;
pub mod ds;
pub mod error;
pub mod grid;
pub mod item;
pub mod layout;
pub mod persist;
pub mod store;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
