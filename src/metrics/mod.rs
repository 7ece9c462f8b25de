//! Grid page metrics (feature `metrics`).
//!
//! Recording, snapshotting and export are split into separate traits so the
//! grid core only writes counters.

pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::GridMetrics;
pub use snapshot::GridMetricsSnapshot;
pub use traits::{GridMetricsRecorder, MetricsExporter, MetricsReset, MetricsSnapshotProvider};
