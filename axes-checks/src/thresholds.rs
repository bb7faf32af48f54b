//! Threshold assertion of a metrics record against a profile.
//!
//! Profile format:
//! `{"metrics": {"<key>": {"min", "max", "warn_above", "allow_none", "severity"}}}`.

use std::collections::BTreeMap;
use std::path::Path;

use axes_core::errors::CheckError;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::io::{load_json, metric_map};
use crate::report::{CheckReport, FindingLevel};

/// How a `min`/`max` violation is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    /// Bound violations are warnings (still upgraded by `fail_on_warn`).
    Warning,
}

/// Bounds for one metric.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MetricThreshold {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub warn_above: Option<f64>,
    pub allow_none: bool,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdProfile {
    pub metrics: BTreeMap<String, MetricThreshold>,
}

impl ThresholdProfile {
    /// Parse a profile document. A missing or empty `metrics` section is malformed.
    pub fn from_value(value: &Value) -> Result<Self, CheckError> {
        let section = value
            .get("metrics")
            .filter(|m| m.as_object().is_some_and(|o| !o.is_empty()))
            .ok_or_else(|| CheckError::Malformed {
                what: "profile".to_string(),
                message: "missing 'metrics' section".to_string(),
            })?;
        let metrics = BTreeMap::<String, MetricThreshold>::deserialize(section).map_err(|e| {
            CheckError::Malformed {
                what: "profile".to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self { metrics })
    }

    pub fn load(path: &Path) -> Result<Self, CheckError> {
        Self::from_value(&load_json(path)?)
    }
}

/// Evaluate every profiled metric against `metrics`.
pub fn assert_thresholds(
    metrics: &Map<String, Value>,
    profile: &ThresholdProfile,
    fail_on_warn: bool,
) -> CheckReport {
    let mut report = CheckReport::default();
    let warn_level = if fail_on_warn {
        FindingLevel::Failure
    } else {
        FindingLevel::Warning
    };

    for (key, threshold) in &profile.metrics {
        let value = metrics.get(key).unwrap_or(&Value::Null);
        if value.is_null() {
            if threshold.allow_none {
                report.push(key, FindingLevel::Info, "unavailable (allowed)");
            } else {
                report.push(key, FindingLevel::Failure, "unavailable but allow_none is false");
            }
            continue;
        }
        let Some(v) = value.as_f64() else {
            report.push(key, FindingLevel::Failure, format!("not numeric: {value}"));
            continue;
        };

        let bound_level = match threshold.severity {
            Severity::Error => FindingLevel::Failure,
            Severity::Warning => warn_level,
        };
        if let Some(min) = threshold.min.filter(|&min| v < min) {
            report.push(key, bound_level, format!("value {v} < min {min}"));
        }
        if let Some(max) = threshold.max.filter(|&max| v > max) {
            report.push(key, bound_level, format!("value {v} > max {max}"));
        }
        if let Some(limit) = threshold.warn_above.filter(|&limit| v > limit) {
            report.push(key, warn_level, format!("value {v} > warn_above {limit}"));
        }
    }

    debug!(
        failures = report.failures(),
        warnings = report.warnings(),
        "threshold assertion evaluated"
    );
    report
}

/// Load both files and assert the record against the profile.
pub fn check_threshold_files(
    metrics_path: &Path,
    profile_path: &Path,
    fail_on_warn: bool,
) -> Result<CheckReport, CheckError> {
    let record = load_json(metrics_path)?;
    let metrics = metric_map(&record).ok_or_else(|| CheckError::Malformed {
        what: "metrics record".to_string(),
        message: "expected a JSON object".to_string(),
    })?;
    let profile = ThresholdProfile::load(profile_path)?;

    let report = assert_thresholds(&metrics, &profile, fail_on_warn);
    info!(
        metrics = %metrics_path.display(),
        profile = %profile_path.display(),
        passed = report.passed(),
        "threshold check finished"
    );
    Ok(report)
}
