//! Full report: axes + optional retention, with run metadata.

use serde::{Deserialize, Serialize};

use super::{AxesRecord, FeatureShift, RetentionMetrics};

/// Run metadata attached to a full report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub version: String,
    pub analysis_type: String,
    pub base_samples: usize,
    pub shifted_samples: Option<usize>,
    pub feature_column: String,
    pub min_samples_required: usize,
}

/// Axes metrics for the baseline plus retention when a shifted snapshot was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullReport {
    pub metadata: ReportMetadata,
    pub axes_metrics: AxesRecord,
    pub retention_metrics: Option<RetentionMetrics>,
    /// Most shifted features, strongest first. `None` without a shifted
    /// snapshot or when either snapshot is below the retention minimum.
    #[serde(default)]
    pub shift_intensity_features: Option<Vec<FeatureShift>>,
}
