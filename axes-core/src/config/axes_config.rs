//! Top-level axes configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DensityConfig, DriftConfig, RetentionConfig, ShapeConfig, TemporalConfig};
use crate::errors::ConfigError;

/// Project config file name looked up in the root passed to [`AxesConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "axes.toml";

/// Top-level configuration aggregating all axis configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`AXES_*`)
/// 2. Project config (`axes.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AxesConfig {
    pub temporal: TemporalConfig,
    pub drift: DriftConfig,
    pub shape: ShapeConfig,
    pub density: DensityConfig,
    pub retention: RetentionConfig,
}

impl AxesConfig {
    /// Load configuration with layered resolution. A missing project file
    /// falls back to compiled defaults; an unparseable one is an error.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &AxesConfig) -> Result<(), ConfigError> {
        let t = &config.temporal;
        if t.window == 0 {
            return Err(invalid("temporal.window", "must be greater than 0"));
        }
        if t.min_periods > t.window {
            return Err(invalid("temporal.min_periods", "must not exceed temporal.window"));
        }
        if t.seasonal_lag == 0 {
            return Err(invalid("temporal.seasonal_lag", "must be greater than 0"));
        }

        let d = &config.drift;
        if d.bin_count < 2 {
            return Err(invalid("drift.bin_count", "must be at least 2"));
        }
        if d.window_size == 0 {
            return Err(invalid("drift.window_size", "must be greater than 0"));
        }
        if !(d.bin_threshold.is_finite() && d.bin_threshold >= 0.0) {
            return Err(invalid("drift.bin_threshold", "must be a non-negative number"));
        }

        let s = &config.shape;
        if !(s.iqr_multiplier.is_finite() && s.iqr_multiplier > 0.0) {
            return Err(invalid("shape.iqr_multiplier", "must be positive"));
        }
        if s.dip_grid_size < 3 {
            return Err(invalid("shape.dip_grid_size", "must be at least 3"));
        }

        let k = &config.density;
        if k.k_min < 2 || k.k_min > k.k_max {
            return Err(invalid("density.k_min", "must satisfy 2 <= k_min <= k_max"));
        }
        if k.n_init == 0 || k.max_iter == 0 {
            return Err(invalid("density.n_init", "n_init and max_iter must be positive"));
        }

        let r = &config.retention;
        if !(r.test_fraction > 0.0 && r.test_fraction < 1.0) {
            return Err(invalid("retention.test_fraction", "must be between 0.0 and 1.0"));
        }
        if r.n_estimators == 0 {
            return Err(invalid("retention.n_estimators", "must be greater than 0"));
        }
        if r.min_samples_split < 2 {
            return Err(invalid("retention.min_samples_split", "must be at least 2"));
        }
        Ok(())
    }

    fn apply_env_overrides(config: &mut AxesConfig) {
        if let Some(v) = env_parse::<usize>("AXES_TEMPORAL_WINDOW") {
            config.temporal.window = v;
        }
        if let Some(v) = env_parse::<usize>("AXES_TEMPORAL_SEASONAL_LAG") {
            config.temporal.seasonal_lag = v;
        }
        if let Some(v) = env_parse::<usize>("AXES_DRIFT_BIN_COUNT") {
            config.drift.bin_count = v;
        }
        if let Some(v) = env_parse::<u64>("AXES_DENSITY_SEED") {
            config.density.seed = v;
        }
        if let Some(v) = env_parse::<usize>("AXES_RETENTION_MIN_SAMPLES") {
            config.retention.min_samples = v;
        }
        if let Some(v) = env_parse::<u64>("AXES_RETENTION_SEED") {
            config.retention.seed = v;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.parse().ok()
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
