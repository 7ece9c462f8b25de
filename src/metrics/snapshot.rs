/// Point-in-time view of a grid page's counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GridMetricsSnapshot {
    pub insert_front_calls: u64,
    pub insert_back_calls: u64,
    pub duplicates_removed: u64,
    pub evicted_entries: u64,

    pub snapshot_hits: u64,
    pub snapshot_rebuilds: u64,

    pub persist_writes: u64,
    pub restore_calls: u64,
    pub restored_items: u64,
    pub unresolved_codes: u64,
    pub malformed_tokens: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub max_count: usize,
}

impl GridMetricsSnapshot {
    /// Total insert calls at either end.
    pub fn insert_calls(&self) -> u64 {
        self.insert_front_calls + self.insert_back_calls
    }

    /// Fraction of snapshot reads served from the cache, in `[0, 1]`.
    pub fn snapshot_hit_rate(&self) -> f64 {
        let total = self.snapshot_hits + self.snapshot_rebuilds;
        if total == 0 {
            0.0
        } else {
            self.snapshot_hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_rate_is_zero_without_reads() {
        assert_eq!(GridMetricsSnapshot::default().snapshot_hit_rate(), 0.0);
    }

    #[test]
    fn hit_rate_counts_hits_over_all_reads() {
        let snap = GridMetricsSnapshot {
            snapshot_hits: 3,
            snapshot_rebuilds: 1,
            insert_front_calls: 2,
            insert_back_calls: 5,
            ..GridMetricsSnapshot::default()
        };
        assert_eq!(snap.snapshot_hit_rate(), 0.75);
        assert_eq!(snap.insert_calls(), 7);
    }
}
