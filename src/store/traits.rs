//! Settings store seam.
//!
//! The store is an external, process-wide key-value store holding single
//! string values. Writes overwrite the whole value; there are no partial
//! updates, so concurrent writers race at overwrite granularity only.

/// Snapshot of settings store counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreMetrics {
    pub reads: u64,
    pub read_misses: u64,
    pub writes: u64,
}

/// String key-value settings store.
pub trait SettingsStore: Send + Sync {
    /// Overwrites the value stored under `key`.
    fn write_string(&self, key: &str, value: &str);

    /// Returns the value under `key`, or `default` if none is stored.
    fn read_string(&self, key: &str, default: &str) -> String;

    /// Snapshot the store's current metrics.
    fn metrics(&self) -> StoreMetrics {
        StoreMetrics::default()
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<T> {
    fn write_string(&self, key: &str, value: &str) {
        (**self).write_string(key, value)
    }

    fn read_string(&self, key: &str, default: &str) -> String {
        (**self).read_string(key, default)
    }

    fn metrics(&self) -> StoreMetrics {
        (**self).metrics()
    }
}
