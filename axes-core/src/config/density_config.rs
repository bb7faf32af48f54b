use serde::{Deserialize, Serialize};

use super::defaults;

/// Density axis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityConfig {
    /// Smallest cluster count scanned.
    pub k_min: usize,
    /// Largest cluster count scanned (inclusive).
    pub k_max: usize,
    /// Minimum complete rows.
    pub min_samples: usize,
    /// k-means restarts per k; the lowest-inertia run wins.
    pub n_init: usize,
    /// Lloyd iteration cap per restart.
    pub max_iter: usize,
    pub seed: u64,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            k_min: defaults::DEFAULT_K_MIN,
            k_max: defaults::DEFAULT_K_MAX,
            min_samples: defaults::DEFAULT_DENSITY_MIN_SAMPLES,
            n_init: defaults::DEFAULT_N_INIT,
            max_iter: defaults::DEFAULT_MAX_ITER,
            seed: defaults::DEFAULT_SEED,
        }
    }
}
