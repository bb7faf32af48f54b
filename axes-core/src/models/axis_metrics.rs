//! Per-axis metric records. `None` means the metric is unavailable.

use serde::{Deserialize, Serialize};

/// Temporal stability axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TemporalMetrics {
    /// Mean rolling variance over global variance.
    pub st_var_ratio: Option<f64>,
    /// Autocorrelation at the seasonal lag.
    pub seasonal_corr: Option<f64>,
}

/// Distributional drift axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DriftMetrics {
    /// Fraction of drifted bins (or windows), 0.0–1.0.
    pub psi_trigger_rate: f64,
}

/// Distribution shape axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeMetrics {
    pub sk_k_score: Option<f64>,
    /// Relative variance drop after removing Tukey outliers, 0.0–1.0.
    pub outlier_impact: Option<f64>,
    pub dip_stat: Option<f64>,
}

/// Density / clustering axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DensityMetrics {
    pub intra_cluster_density: Option<f64>,
    pub silhouette_approx: Option<f64>,
    pub density_k: Option<u32>,
}

impl DensityMetrics {
    /// All fields unavailable.
    pub fn unavailable() -> Self {
        Self::default()
    }
}
