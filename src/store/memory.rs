//! In-memory settings store.
//!
//! ## Architecture
//! - Values live in an `FxHashMap<String, String>` behind a `parking_lot::RwLock`.
//! - Counters are atomics so reads only take the shared lock.
//!
//! ## Example Usage
//! ```rust
//! use gridkit::store::memory::MemorySettingsStore;
//! use gridkit::store::traits::SettingsStore;
//!
//! let store = MemorySettingsStore::new();
//! assert_eq!(store.read_string("emoji_recent_keys", ""), "");
//! store.write_string("emoji_recent_keys", "128512,");
//! assert_eq!(store.read_string("emoji_recent_keys", ""), "128512,");
//! ```
//!
//! ## Thread Safety
//! - `MemorySettingsStore` is `Send + Sync`; share it behind an `Arc`.
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::store::traits::{SettingsStore, StoreMetrics};

#[derive(Debug, Default)]
struct StoreCounters {
    reads: AtomicU64,
    read_misses: AtomicU64,
    writes: AtomicU64,
}

/// Thread-safe in-memory [`SettingsStore`].
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<FxHashMap<String, String>>,
    counters: StoreCounters,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RwLock::new(values),
            counters: StoreCounters::default(),
        }
    }

    /// Removes the value under `key`, returning it if present.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.values.write().remove(key)
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.read().contains_key(key)
    }
}

impl SettingsStore for MemorySettingsStore {
    fn write_string(&self, key: &str, value: &str) {
        self.values.write().insert(key.to_owned(), value.to_owned());
        self.counters.writes.fetch_add(1, Ordering::Relaxed);
    }

    fn read_string(&self, key: &str, default: &str) -> String {
        self.counters.reads.fetch_add(1, Ordering::Relaxed);
        match self.values.read().get(key) {
            Some(value) => value.clone(),
            None => {
                self.counters.read_misses.fetch_add(1, Ordering::Relaxed);
                default.to_owned()
            },
        }
    }

    fn metrics(&self) -> StoreMetrics {
        StoreMetrics {
            reads: self.counters.reads.load(Ordering::Relaxed),
            read_misses: self.counters.read_misses.load(Ordering::Relaxed),
            writes: self.counters.writes.load(Ordering::Relaxed),
        }
    }
}
