//! Compiled defaults for every config section.

// Temporal
pub const DEFAULT_WINDOW: usize = 24;
pub const DEFAULT_MIN_PERIODS: usize = 5;
pub const DEFAULT_SEASONAL_LAG: usize = 24;

// Drift
pub const DEFAULT_BIN_COUNT: usize = 10;
/// Per-bin PSI contribution above which a bin counts as drifted
/// (a total PSI of 0.1 spread evenly over 10 bins).
pub const DEFAULT_BIN_THRESHOLD: f64 = 0.01;
pub const DEFAULT_DRIFT_MIN_LEN: usize = 120;
pub const DEFAULT_DRIFT_MIN_SAMPLES: usize = 50;
pub const DEFAULT_DRIFT_WINDOW_SIZE: usize = 100;
pub const DEFAULT_PSI_THRESHOLD: f64 = 0.1;

// Shape
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;
pub const DEFAULT_DIP_MIN_SAMPLES: usize = 40;
pub const DEFAULT_DIP_GRID_SIZE: usize = 256;

// Density
pub const DEFAULT_K_MIN: usize = 2;
pub const DEFAULT_K_MAX: usize = 5;
pub const DEFAULT_DENSITY_MIN_SAMPLES: usize = 40;
pub const DEFAULT_N_INIT: usize = 10;
pub const DEFAULT_MAX_ITER: usize = 300;

// Retention
pub const DEFAULT_RETENTION_MIN_SAMPLES: usize = 200;
pub const DEFAULT_TEST_FRACTION: f64 = 0.25;
pub const DEFAULT_N_ESTIMATORS: usize = 200;
pub const DEFAULT_MIN_SAMPLES_SPLIT: usize = 2;
pub const DEFAULT_SHIFT_TOP_K: usize = 5;
pub const DEFAULT_KS_MIN_SAMPLES: usize = 30;

/// Seed shared by every randomized step.
pub const DEFAULT_SEED: u64 = 42;
