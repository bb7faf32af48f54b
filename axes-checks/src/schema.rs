//! Structural validation of a persisted axes record.

use std::path::Path;

use axes_core::constants::AXES_KEYS;
use axes_core::errors::CheckError;
use serde_json::Value;
use tracing::info;

use crate::io::{load_json, metric_map};
use crate::report::{CheckReport, FindingLevel};

const COUNT_KEY: &str = "density_k";

/// Keys that may be absent; older records predate the shape and density axes.
const OPTIONAL_KEYS: [&str; 4] = [
    "dip_stat",
    "intra_cluster_density",
    "silhouette_approx",
    COUNT_KEY,
];

/// Axes keys must be present (except [`OPTIONAL_KEYS`]); values are numbers
/// or `null`. `density_k` must additionally be a non-negative whole number,
/// written as `3` or `3.0`. Extra keys are ignored.
pub fn validate_record(record: &Value) -> CheckReport {
    let mut report = CheckReport::default();
    let Some(map) = metric_map(record) else {
        report.push("<record>", FindingLevel::Failure, "record is not a JSON object");
        return report;
    };

    for key in AXES_KEYS {
        let Some(value) = map.get(key) else {
            if !OPTIONAL_KEYS.contains(&key) {
                report.push(key, FindingLevel::Failure, "missing key");
            }
            continue;
        };
        if value.is_null() {
            continue;
        }
        if key == COUNT_KEY {
            if !is_count(value) {
                report.push(
                    key,
                    FindingLevel::Failure,
                    format!("expected a non-negative integer or null, got {value}"),
                );
            }
        } else if !value.is_number() {
            report.push(
                key,
                FindingLevel::Failure,
                format!("expected a number or null, got {value}"),
            );
        }
    }
    report
}

fn is_count(value: &Value) -> bool {
    value.as_u64().is_some()
        || value
            .as_f64()
            .is_some_and(|f| f >= 0.0 && f.fract() == 0.0)
}

/// Load `path` and validate it.
pub fn validate_file(path: &Path) -> Result<CheckReport, CheckError> {
    let record = load_json(path)?;
    let report = validate_record(&record);
    info!(
        file = %path.display(),
        violations = report.failures(),
        "schema validation finished"
    );
    Ok(report)
}
