use serde::{Deserialize, Serialize};

use super::defaults;

/// Retention axis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Either snapshot below this row count makes every field unavailable.
    pub min_samples: usize,
    /// Held-out fraction of each split.
    pub test_fraction: f64,
    /// Seed for splits and the default classifier.
    pub seed: u64,
    /// Trees in the default random forest.
    pub n_estimators: usize,
    /// Depth cap for each tree; `None` grows until pure.
    pub max_depth: Option<usize>,
    /// Minimum node size eligible for a split.
    pub min_samples_split: usize,
    /// Features listed in the shift-intensity diagnostic.
    pub shift_top_k: usize,
    /// A feature needs more than this many valid values on both sides
    /// before its KS distance is computed.
    pub ks_min_samples: usize,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            min_samples: defaults::DEFAULT_RETENTION_MIN_SAMPLES,
            test_fraction: defaults::DEFAULT_TEST_FRACTION,
            seed: defaults::DEFAULT_SEED,
            n_estimators: defaults::DEFAULT_N_ESTIMATORS,
            max_depth: None,
            min_samples_split: defaults::DEFAULT_MIN_SAMPLES_SPLIT,
            shift_top_k: defaults::DEFAULT_SHIFT_TOP_K,
            ks_min_samples: defaults::DEFAULT_KS_MIN_SAMPLES,
        }
    }
}
