use std::io::Write;

use parking_lot::Mutex;

use crate::metrics::snapshot::GridMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for grid metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_counter(&self, name: &str, value: u64) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "# TYPE {} counter", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "# TYPE {} gauge", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<GridMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &GridMetricsSnapshot) {
        self.write_counter(
            &self.metric_name("insert_front_calls_total"),
            snapshot.insert_front_calls,
        );
        self.write_counter(
            &self.metric_name("insert_back_calls_total"),
            snapshot.insert_back_calls,
        );
        self.write_counter(
            &self.metric_name("duplicates_removed_total"),
            snapshot.duplicates_removed,
        );
        self.write_counter(
            &self.metric_name("evicted_entries_total"),
            snapshot.evicted_entries,
        );
        self.write_counter(&self.metric_name("snapshot_hits_total"), snapshot.snapshot_hits);
        self.write_counter(
            &self.metric_name("snapshot_rebuilds_total"),
            snapshot.snapshot_rebuilds,
        );
        self.write_counter(&self.metric_name("persist_writes_total"), snapshot.persist_writes);
        self.write_counter(&self.metric_name("restore_calls_total"), snapshot.restore_calls);
        self.write_counter(&self.metric_name("restored_items_total"), snapshot.restored_items);
        self.write_counter(
            &self.metric_name("unresolved_codes_total"),
            snapshot.unresolved_codes,
        );
        self.write_counter(
            &self.metric_name("malformed_tokens_total"),
            snapshot.malformed_tokens,
        );
        self.write_gauge(&self.metric_name("len"), snapshot.len as u64);
        self.write_gauge(&self.metric_name("max_count"), snapshot.max_count as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_prefixed_counters_and_gauges() {
        let exporter = PrometheusTextExporter::new("recents", Vec::new());
        let snapshot = GridMetricsSnapshot {
            insert_front_calls: 3,
            evicted_entries: 1,
            len: 2,
            max_count: 2,
            ..GridMetricsSnapshot::default()
        };
        exporter.export(&snapshot);

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE recents_insert_front_calls_total counter\n"));
        assert!(text.contains("recents_insert_front_calls_total 3\n"));
        assert!(text.contains("recents_evicted_entries_total 1\n"));
        assert!(text.contains("# TYPE recents_len gauge\nrecents_len 2\n"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&GridMetricsSnapshot::default());
        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("\nmax_count 0\n"));
    }
}
