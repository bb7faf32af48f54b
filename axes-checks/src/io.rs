use std::path::Path;

use axes_core::errors::CheckError;
use serde_json::{Map, Value};

/// Read and parse a JSON file.
pub fn load_json(path: &Path) -> Result<Value, CheckError> {
    if !path.exists() {
        return Err(CheckError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| CheckError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| CheckError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// The flat metric map of a persisted record.
///
/// A full report nests its metrics under `axes_metrics` and
/// `retention_metrics`; both are merged into one map. Any other object is
/// taken as a flat record.
pub fn metric_map(record: &Value) -> Option<Map<String, Value>> {
    let object = record.as_object()?;
    match object.get("axes_metrics").and_then(Value::as_object) {
        Some(axes) => {
            let mut merged = axes.clone();
            if let Some(retention) = object.get("retention_metrics").and_then(Value::as_object) {
                merged.extend(retention.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            Some(merged)
        }
        None => Some(object.clone()),
    }
}
