//! Per-feature shift diagnostic attached to a full report.

use serde::{Deserialize, Serialize};

/// How far one numeric feature moved between the baseline and the shifted snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureShift {
    pub feature: String,
    /// Two-sample Kolmogorov-Smirnov distance; `0.0` when either side is too small.
    pub ks_stat: f64,
    /// Shifted mean minus baseline mean.
    pub mean_diff: f64,
}
