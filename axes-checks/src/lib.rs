//! # axes-checks
//!
//! Downstream consumers of persisted axes records: threshold assertion
//! against a profile and structural schema validation. Both report through
//! [`CheckReport`] and map to process exit codes `0` (pass), `1` (violation)
//! and `2` (unreadable or malformed input).

pub mod io;
pub mod report;
pub mod schema;
pub mod thresholds;

pub use report::{exit_code, CheckReport, Finding, FindingLevel};
pub use schema::{validate_file, validate_record};
pub use thresholds::{
    assert_thresholds, check_threshold_files, MetricThreshold, Severity, ThresholdProfile,
};
