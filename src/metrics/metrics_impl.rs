use crate::metrics::traits::GridMetricsRecorder;

/// Counters owned by a [`GridCore`](crate::grid::GridCore).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub insert_front_calls: u64,
    pub insert_back_calls: u64,
    pub duplicates_removed: u64,
    pub evicted_entries: u64,
    pub snapshot_rebuilds: u64,
    pub snapshot_hits: u64,
}

impl GridMetricsRecorder for GridMetrics {
    #[inline]
    fn record_insert_front(&mut self) {
        self.insert_front_calls += 1;
    }

    #[inline]
    fn record_insert_back(&mut self) {
        self.insert_back_calls += 1;
    }

    #[inline]
    fn record_duplicates_removed(&mut self, count: usize) {
        self.duplicates_removed += count as u64;
    }

    #[inline]
    fn record_evictions(&mut self, count: usize) {
        self.evicted_entries += count as u64;
    }

    #[inline]
    fn record_snapshot_rebuild(&mut self) {
        self.snapshot_rebuilds += 1;
    }

    #[inline]
    fn record_snapshot_hit(&mut self) {
        self.snapshot_hits += 1;
    }
}
