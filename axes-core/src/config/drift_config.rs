use serde::{Deserialize, Serialize};

use super::defaults;

/// How the drift trigger rate is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftStrategy {
    /// Fraction of baseline quantile bins whose PSI contribution exceeds `bin_threshold`.
    #[default]
    BinShift,
    /// Fraction of rolling windows whose PSI against the whole series exceeds `psi_threshold`.
    RollingWindow,
}

/// Drift axis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    pub strategy: DriftStrategy,
    /// Quantile bins computed from the baseline.
    pub bin_count: usize,
    /// Per-bin PSI contribution threshold (bin-shift strategy).
    pub bin_threshold: f64,
    /// Single-series input shorter than this yields 0.0.
    pub min_len: usize,
    /// Minimum valid observations per side.
    pub min_samples: usize,
    /// Window length (rolling-window strategy).
    pub window_size: usize,
    /// Window PSI threshold (rolling-window strategy).
    pub psi_threshold: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            strategy: DriftStrategy::default(),
            bin_count: defaults::DEFAULT_BIN_COUNT,
            bin_threshold: defaults::DEFAULT_BIN_THRESHOLD,
            min_len: defaults::DEFAULT_DRIFT_MIN_LEN,
            min_samples: defaults::DEFAULT_DRIFT_MIN_SAMPLES,
            window_size: defaults::DEFAULT_DRIFT_WINDOW_SIZE,
            psi_threshold: defaults::DEFAULT_PSI_THRESHOLD,
        }
    }
}
