//! Metric record models - typed per-axis records and their flat merge.

pub mod axes_record;
pub mod axis_metrics;
pub mod feature_shift;
pub mod full_report;
pub mod retention_metrics;

pub use axes_record::AxesRecord;
pub use axis_metrics::{DensityMetrics, DriftMetrics, ShapeMetrics, TemporalMetrics};
pub use feature_shift::FeatureShift;
pub use full_report::{FullReport, ReportMetadata};
pub use retention_metrics::RetentionMetrics;
