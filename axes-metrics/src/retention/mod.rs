//! Retention axis: how much classification performance survives a shift.
//!
//! A classifier trained on the baseline is scored on the baseline's held-out
//! quarter, applied unchanged to the shifted snapshot (zero-shot), and
//! compared with a classifier retrained on the shifted snapshot.

pub mod centroid;
pub mod dataset;
pub mod f1;
pub mod forest;
pub mod shift;
pub mod split;

pub use centroid::NearestCentroid;
pub use dataset::LabeledSet;
pub use f1::macro_f1;
pub use forest::{ForestParams, RandomForest};
pub use shift::{feature_shift_intensity, ks_statistic};
pub use split::{train_test_split, Split};

use axes_core::config::RetentionConfig;
use axes_core::errors::{AxesResult, ClassifierError};
use axes_core::frame::FeatureMatrix;
use axes_core::models::{FeatureShift, RetentionMetrics};
use axes_core::retention_span;
use axes_core::traits::{Classifier, ClassifierFactory};
use tracing::{debug, info};

use crate::utils::{safe_ratio, try_or_none};

/// Builds unfitted random forests from a retention config.
#[derive(Debug, Clone)]
pub struct ForestFactory {
    params: ForestParams,
}

impl ForestFactory {
    pub fn from_config(config: &RetentionConfig) -> Self {
        Self {
            params: ForestParams {
                n_estimators: config.n_estimators,
                max_depth: config.max_depth,
                min_samples_split: config.min_samples_split,
                seed: config.seed,
            },
        }
    }
}

impl ClassifierFactory for ForestFactory {
    fn create(&self) -> Box<dyn Classifier> {
        Box::new(RandomForest::new(self.params.clone()))
    }
}

/// Retention metrics with the default random forest.
pub fn compute_retention_metrics(
    base: &FeatureMatrix,
    shift: &FeatureMatrix,
    config: &RetentionConfig,
) -> AxesResult<RetentionMetrics> {
    compute_retention_metrics_with(base, shift, config, &ForestFactory::from_config(config))
}

/// Retention metrics with classifiers from `factory`.
///
/// Snapshot misalignment is a caller error and is returned as `Err`;
/// everything else degrades to unavailable fields.
pub fn compute_retention_metrics_with(
    base: &FeatureMatrix,
    shift: &FeatureMatrix,
    config: &RetentionConfig,
    factory: &dyn ClassifierFactory,
) -> AxesResult<RetentionMetrics> {
    let _span = retention_span!(base.n_rows(), shift.n_rows()).entered();

    if base.n_rows() < config.min_samples || shift.n_rows() < config.min_samples {
        info!(
            base_rows = base.n_rows(),
            shift_rows = shift.n_rows(),
            min_samples = config.min_samples,
            "snapshots below minimum size, retention unavailable"
        );
        return Ok(RetentionMetrics::unavailable());
    }

    let (base_set, shift_set) = dataset::prepare(base, shift)?;
    debug!(
        base_complete = base_set.len(),
        shift_complete = shift_set.len(),
        base_classes = base_set.n_classes(),
        shift_classes = shift_set.n_classes(),
        "retention inputs prepared"
    );

    let baseline = if base_set.n_classes() > 1 {
        try_or_none("macro_f1_base", || fit_and_score(&base_set, config, factory))
    } else {
        None
    };
    let shift_has_classes = shift_set.n_classes() > 1;

    let zero_shot = match &baseline {
        Some((classifier, _)) if shift_has_classes => try_or_none("macro_f1_shifted_zero_shot", || {
            score_on_test(classifier.as_ref(), &shift_set, config)
        }),
        _ => None,
    };
    let retrained = if shift_has_classes {
        try_or_none("macro_f1_shifted_retrained", || {
            fit_and_score(&shift_set, config, factory).map(|(_, f1)| f1)
        })
    } else {
        None
    };

    let base_f1 = baseline.map(|(_, f1)| f1);
    let metrics = RetentionMetrics {
        macro_f1_base: base_f1,
        macro_f1_shifted_zero_shot: zero_shot,
        macro_f1_shifted_retrained: retrained,
        retention_zero_shot: ratio(zero_shot, base_f1),
        retention_retrained: ratio(retrained, base_f1),
    };
    info!(?metrics, "retention metrics computed");
    Ok(metrics)
}

/// Per-feature shift ranking, or `None` when either snapshot is below the
/// retention minimum.
pub fn compute_shift_intensity(
    base: &FeatureMatrix,
    shift: &FeatureMatrix,
    config: &RetentionConfig,
) -> Option<Vec<FeatureShift>> {
    if base.n_rows() < config.min_samples || shift.n_rows() < config.min_samples {
        debug!("snapshots below minimum size, shift intensity unavailable");
        return None;
    }
    Some(feature_shift_intensity(base, shift, config))
}

fn ratio(numerator: Option<f64>, base: Option<f64>) -> Option<f64> {
    Some(safe_ratio(numerator?, base?))
}

/// Fit a fresh classifier on the seeded training split and score it on the
/// held-out split.
fn fit_and_score(
    set: &LabeledSet,
    config: &RetentionConfig,
    factory: &dyn ClassifierFactory,
) -> Result<(Box<dyn Classifier>, f64), ClassifierError> {
    let split = train_test_split(&set.labels, config.test_fraction, config.seed);
    let mut classifier = factory.create();
    classifier.fit(&set.rows_at(&split.train), &set.labels_at(&split.train))?;
    let f1 = evaluate(classifier.as_ref(), set, &split.test)?;
    Ok((classifier, f1))
}

/// Score an already fitted classifier on the held-out split of `set`.
fn score_on_test(
    classifier: &dyn Classifier,
    set: &LabeledSet,
    config: &RetentionConfig,
) -> Result<f64, ClassifierError> {
    let split = train_test_split(&set.labels, config.test_fraction, config.seed);
    evaluate(classifier, set, &split.test)
}

fn evaluate(classifier: &dyn Classifier, set: &LabeledSet, test: &[usize]) -> Result<f64, ClassifierError> {
    let predicted = classifier.predict(&set.rows_at(test))?;
    macro_f1(&set.labels_at(test), &predicted).ok_or(ClassifierError::EmptyEvaluationSet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axes_core::frame::Column;

    fn small_config() -> RetentionConfig {
        RetentionConfig {
            min_samples: 40,
            n_estimators: 15,
            ..RetentionConfig::default()
        }
    }

    fn separable(rows: usize, offset: f64) -> FeatureMatrix {
        let x: Vec<f64> = (0..rows).map(|i| i as f64 + offset).collect();
        let noise: Vec<f64> = (0..rows).map(|i| ((i * 7) % 11) as f64).collect();
        let y: Vec<f64> = (0..rows).map(|i| f64::from(u8::from(i >= rows / 2))).collect();
        FeatureMatrix::new(vec![
            Column::numeric("x", &x),
            Column::numeric("noise", &noise),
            Column::numeric("label", &y),
        ])
        .unwrap()
    }

    #[test]
    fn test_identical_snapshots_retain_fully() {
        let frame = separable(80, 0.0);
        let m = compute_retention_metrics(&frame, &frame, &small_config()).unwrap();
        assert!(m.macro_f1_base.unwrap() > 0.85);
        assert_eq!(m.macro_f1_base, m.macro_f1_shifted_zero_shot);
        assert!((m.retention_zero_shot.unwrap() - 1.0).abs() < 1e-6);
        assert!((m.retention_retrained.unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_shift_hurts_zero_shot_only() {
        let base = separable(80, 0.0);
        let shifted = separable(80, 1000.0);
        let m = compute_retention_metrics(&base, &shifted, &small_config()).unwrap();
        // Every shifted x lies beyond the baseline range, on the upper-class side.
        assert!(m.retention_zero_shot.unwrap() < 0.75);
        assert!(m.macro_f1_shifted_retrained.unwrap() > 0.85);
    }

    #[test]
    fn test_small_snapshots_unavailable() {
        let frame = separable(20, 0.0);
        let m = compute_retention_metrics(&frame, &frame, &small_config()).unwrap();
        assert!(m.is_unavailable());
    }

    #[test]
    fn test_single_class_baseline() {
        let x: Vec<f64> = (0..50).map(f64::from).collect();
        let base = FeatureMatrix::new(vec![
            Column::numeric("x", &x),
            Column::numeric("label", &[1.0; 50]),
        ])
        .unwrap();
        let shifted = separable(50, 0.0);
        let shifted = FeatureMatrix::new(vec![
            shifted.columns()[0].clone(),
            shifted.columns()[2].clone(),
        ])
        .unwrap();
        let m = compute_retention_metrics(&base, &shifted, &small_config()).unwrap();
        assert_eq!(m.macro_f1_base, None);
        assert_eq!(m.macro_f1_shifted_zero_shot, None);
        assert!(m.macro_f1_shifted_retrained.is_some());
        assert_eq!(m.retention_retrained, None);
    }

    #[test]
    fn test_stub_classifier_through_factory() {
        let frame = separable(60, 0.0);
        let factory = || Box::new(NearestCentroid::new()) as Box<dyn Classifier>;
        let m = compute_retention_metrics_with(&frame, &frame, &small_config(), &factory).unwrap();
        assert!(m.macro_f1_base.unwrap() > 0.8);
        assert_eq!(m.retention_zero_shot, m.retention_retrained);
    }

    #[test]
    fn test_shift_intensity_needs_min_samples() {
        let base = separable(80, 0.0);
        let shifted = separable(80, 1000.0);
        assert!(compute_shift_intensity(&base, &shifted, &RetentionConfig::default()).is_none());

        let shifts = compute_shift_intensity(&base, &shifted, &small_config()).unwrap();
        assert_eq!(shifts[0].feature, "x");
        assert!((shifts[0].mean_diff - 1000.0).abs() < 1e-9);
        assert_eq!(shifts[0].ks_stat, 1.0);
        assert!(shifts.iter().all(|s| s.feature != "label"));
    }
}
