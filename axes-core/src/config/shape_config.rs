use serde::{Deserialize, Serialize};

use super::defaults;

/// Shape axis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Tukey fence multiplier.
    pub iqr_multiplier: f64,
    /// Below this many valid values `dip_stat` is unavailable.
    pub dip_min_samples: usize,
    /// KDE evaluation grid size.
    pub dip_grid_size: usize,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            iqr_multiplier: defaults::DEFAULT_IQR_MULTIPLIER,
            dip_min_samples: defaults::DEFAULT_DIP_MIN_SAMPLES,
            dip_grid_size: defaults::DEFAULT_DIP_GRID_SIZE,
        }
    }
}
