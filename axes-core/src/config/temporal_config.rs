use serde::{Deserialize, Serialize};

use super::defaults;

/// Temporal axis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalConfig {
    /// Rolling window length (observations).
    pub window: usize,
    /// Minimum valid observations for a window to contribute.
    pub min_periods: usize,
    /// Lag used for the seasonal autocorrelation.
    pub seasonal_lag: usize,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_WINDOW,
            min_periods: defaults::DEFAULT_MIN_PERIODS,
            seasonal_lag: defaults::DEFAULT_SEASONAL_LAG,
        }
    }
}
