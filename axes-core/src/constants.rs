/// Engine version, stamped into every full report.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Additive stabilizer for ratios against a near-zero denominator.
pub const EPSILON: f64 = 1e-9;

/// Floor applied to empty histogram bins before taking a log ratio.
pub const PSI_PROPORTION_FLOOR: f64 = 1e-10;

/// Analysis type tag for axes-only reports.
pub const ANALYSIS_AXES: &str = "axes_metrics";

/// Analysis type tag for axes + retention reports.
pub const ANALYSIS_FULL: &str = "full_metrics";

/// The fixed key vocabulary of an axes record, in serialization order.
pub const AXES_KEYS: [&str; 9] = [
    "st_var_ratio",
    "seasonal_corr",
    "psi_trigger_rate",
    "sk_k_score",
    "outlier_impact",
    "dip_stat",
    "intra_cluster_density",
    "silhouette_approx",
    "density_k",
];

/// The fixed key vocabulary of a retention record.
pub const RETENTION_KEYS: [&str; 5] = [
    "macro_f1_base",
    "macro_f1_shifted_zero_shot",
    "macro_f1_shifted_retrained",
    "retention_zero_shot",
    "retention_retrained",
];
