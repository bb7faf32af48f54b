//! Exit-code behaviour of the checks against the golden records.

use std::io::Write;
use std::path::Path;

use axes_checks::report::{EXIT_INPUT_ERROR, EXIT_PASS, EXIT_VIOLATION};
use axes_checks::{check_threshold_files, exit_code, validate_file};
use axes_core::errors::CheckError;
use tempfile::NamedTempFile;
use test_fixtures::fixture_path;

const DEFAULT_PROFILE: &str = "golden/profiles/default_profile.json";

fn write_json(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn thresholds(metrics: &Path, fail_on_warn: bool) -> u8 {
    let outcome = check_threshold_files(metrics, &fixture_path(DEFAULT_PROFILE), fail_on_warn);
    exit_code(&outcome)
}

#[test]
fn valid_record_passes_default_profile() {
    let path = fixture_path("golden/metrics/valid_record.json");
    assert_eq!(thresholds(&path, false), EXIT_PASS);
    assert_eq!(thresholds(&path, true), EXIT_PASS);
}

#[test]
fn allowed_nulls_pass() {
    let path = fixture_path("golden/metrics/partial_record.json");
    assert_eq!(thresholds(&path, false), EXIT_PASS);
}

#[test]
fn non_numeric_value_is_a_violation() {
    let path = fixture_path("golden/metrics/bad_types.json");
    let report = check_threshold_files(&path, &fixture_path(DEFAULT_PROFILE), false).unwrap();
    assert!(report
        .findings
        .iter()
        .any(|f| f.key == "st_var_ratio" && f.message.contains("not numeric")));
    assert_eq!(report.exit_code(), EXIT_VIOLATION);
}

#[test]
fn profile_without_metrics_section_is_input_error() {
    let outcome = check_threshold_files(
        &fixture_path("golden/metrics/valid_record.json"),
        &fixture_path("golden/profiles/missing_metrics_section.json"),
        false,
    );
    assert!(matches!(outcome, Err(CheckError::Malformed { .. })));
    assert_eq!(exit_code(&outcome), EXIT_INPUT_ERROR);
}

#[test]
fn missing_and_unparsable_files_are_input_errors() {
    let missing = Path::new("/nonexistent/metrics.json");
    assert_eq!(thresholds(missing, false), EXIT_INPUT_ERROR);

    let broken = write_json("{ not json");
    let outcome = validate_file(broken.path());
    assert!(matches!(outcome, Err(CheckError::Parse { .. })));
    assert_eq!(exit_code(&outcome), EXIT_INPUT_ERROR);
}

#[test]
fn warning_fails_only_with_fail_on_warn() {
    let record = write_json(
        r#"{
            "st_var_ratio": 0.5, "seasonal_corr": null, "psi_trigger_rate": 0.5,
            "sk_k_score": 1.0, "outlier_impact": 0.1, "dip_stat": 0.0,
            "intra_cluster_density": 0.3, "silhouette_approx": 0.4, "density_k": 2
        }"#,
    );
    assert_eq!(thresholds(record.path(), false), EXIT_PASS);
    assert_eq!(thresholds(record.path(), true), EXIT_VIOLATION);
}

#[test]
fn full_report_is_checked_through_its_axes_section() {
    let report = write_json(
        r#"{
            "metadata": {"version": "0.2.0", "analysis_type": "full_metrics"},
            "axes_metrics": {
                "st_var_ratio": 0.5, "seasonal_corr": 0.1, "psi_trigger_rate": 0.0,
                "sk_k_score": 1.0, "outlier_impact": 0.1, "dip_stat": 0.0,
                "intra_cluster_density": 0.3, "silhouette_approx": 0.4, "density_k": 4
            },
            "retention_metrics": {"retention_zero_shot": 0.93}
        }"#,
    );
    assert_eq!(exit_code(&validate_file(report.path())), EXIT_PASS);
    assert_eq!(thresholds(report.path(), false), EXIT_PASS);
}

#[test]
fn record_without_shape_and_density_keys_is_valid() {
    let record = write_json(
        r#"{
            "st_var_ratio": 0.5, "seasonal_corr": 0.2, "psi_trigger_rate": 0.0,
            "sk_k_score": 1.0, "outlier_impact": 0.1
        }"#,
    );
    assert_eq!(exit_code(&validate_file(record.path())), EXIT_PASS);

    let whole_float_k = write_json(
        r#"{
            "st_var_ratio": 0.5, "seasonal_corr": 0.2, "psi_trigger_rate": 0.0,
            "sk_k_score": 1.0, "outlier_impact": 0.1, "density_k": 3.0
        }"#,
    );
    assert_eq!(exit_code(&validate_file(whole_float_k.path())), EXIT_PASS);
}

#[test]
fn schema_exit_codes() {
    let valid = validate_file(&fixture_path("golden/metrics/valid_record.json"));
    assert_eq!(exit_code(&valid), EXIT_PASS);

    let partial = validate_file(&fixture_path("golden/metrics/partial_record.json"));
    assert_eq!(exit_code(&partial), EXIT_PASS);

    let bad = validate_file(&fixture_path("golden/metrics/bad_types.json")).unwrap();
    assert_eq!(bad.failures(), 2);
    assert_eq!(bad.exit_code(), EXIT_VIOLATION);
}
