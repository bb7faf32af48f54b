//! Aggregator: runs every axis over a snapshot and assembles records and reports.

use axes_core::config::AxesConfig;
use axes_core::constants::{ANALYSIS_AXES, ANALYSIS_FULL, VERSION};
use axes_core::errors::AxesResult;
use axes_core::frame::{FeatureMatrix, Series};
use axes_core::models::{AxesRecord, FullReport, ReportMetadata};
use axes_core::traits::ClassifierFactory;
use tracing::info;

use crate::density::compute_density_metrics;
use crate::drift::compute_drift_metrics;
use crate::retention::{compute_retention_metrics_with, compute_shift_intensity, ForestFactory};
use crate::shape::compute_shape_metrics;
use crate::temporal::compute_temporal_metrics;

/// Runs every axis over a snapshot and merges the results into one record.
pub struct AxesEngine {
    config: AxesConfig,
}

impl AxesEngine {
    pub fn new(config: AxesConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AxesConfig {
        &self.config
    }

    /// Temporal, drift and shape on `feature_column`, density on the whole frame.
    pub fn compute_axes(&self, frame: &FeatureMatrix, feature_column: &str) -> AxesResult<AxesRecord> {
        let series = self.feature_series(frame, feature_column)?;

        let record = AxesRecord::merge(
            compute_temporal_metrics(&series, &self.config.temporal),
            compute_drift_metrics(&series, &self.config.drift),
            compute_shape_metrics(&series, &self.config.shape),
            compute_density_metrics(frame, &self.config.density),
        );
        info!(
            rows = frame.n_rows(),
            feature_column,
            unavailable = record.unavailable_count(),
            "axes computed"
        );
        Ok(record)
    }

    /// Same result as [`compute_axes`](Self::compute_axes), with the four
    /// components fanned out on the rayon pool.
    pub fn compute_axes_parallel(
        &self,
        frame: &FeatureMatrix,
        feature_column: &str,
    ) -> AxesResult<AxesRecord> {
        let series = self.feature_series(frame, feature_column)?;
        let cfg = &self.config;

        let ((temporal, drift), (shape, density)) = rayon::join(
            || {
                rayon::join(
                    || compute_temporal_metrics(&series, &cfg.temporal),
                    || compute_drift_metrics(&series, &cfg.drift),
                )
            },
            || {
                rayon::join(
                    || compute_shape_metrics(&series, &cfg.shape),
                    || compute_density_metrics(frame, &cfg.density),
                )
            },
        );
        let record = AxesRecord::merge(temporal, drift, shape, density);
        info!(
            rows = frame.n_rows(),
            feature_column,
            unavailable = record.unavailable_count(),
            "axes computed in parallel"
        );
        Ok(record)
    }

    /// Axes of `base` plus retention against `shifted` when one is given,
    /// using the default random forest.
    pub fn compute_full(
        &self,
        base: &FeatureMatrix,
        shifted: Option<&FeatureMatrix>,
        feature_column: &str,
    ) -> AxesResult<FullReport> {
        let factory = ForestFactory::from_config(&self.config.retention);
        self.compute_full_with(base, shifted, feature_column, &factory)
    }

    /// [`compute_full`](Self::compute_full) with a caller-chosen classifier.
    pub fn compute_full_with(
        &self,
        base: &FeatureMatrix,
        shifted: Option<&FeatureMatrix>,
        feature_column: &str,
        factory: &dyn ClassifierFactory,
    ) -> AxesResult<FullReport> {
        let axes_metrics = self.compute_axes(base, feature_column)?;
        let retention_metrics = shifted
            .map(|shift| {
                compute_retention_metrics_with(base, shift, &self.config.retention, factory)
            })
            .transpose()?;
        let shift_intensity_features =
            shifted.and_then(|shift| compute_shift_intensity(base, shift, &self.config.retention));

        let metadata = ReportMetadata {
            version: VERSION.to_string(),
            analysis_type: if shifted.is_some() {
                ANALYSIS_FULL
            } else {
                ANALYSIS_AXES
            }
            .to_string(),
            base_samples: base.n_rows(),
            shifted_samples: shifted.map(FeatureMatrix::n_rows),
            feature_column: feature_column.to_string(),
            min_samples_required: self.config.retention.min_samples,
        };
        Ok(FullReport {
            metadata,
            axes_metrics,
            retention_metrics,
            shift_intensity_features,
        })
    }

    fn feature_series(&self, frame: &FeatureMatrix, feature_column: &str) -> AxesResult<Series> {
        Ok(frame.require(feature_column)?.to_series())
    }
}

impl Default for AxesEngine {
    fn default() -> Self {
        Self::new(AxesConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axes_core::errors::{AxesError, FrameError};
    use axes_core::frame::Column;

    fn frame(rows: usize) -> FeatureMatrix {
        let a: Vec<f64> = (0..rows).map(|i| (i as f64 * 0.3).sin()).collect();
        let b: Vec<f64> = (0..rows).map(|i| (i % 13) as f64).collect();
        let y: Vec<f64> = (0..rows).map(|i| (i % 2) as f64).collect();
        FeatureMatrix::new(vec![
            Column::numeric("a", &a),
            Column::numeric("b", &b),
            Column::numeric("target", &y),
        ])
        .unwrap()
    }

    #[test]
    fn test_missing_feature_column() {
        let err = AxesEngine::default().compute_axes(&frame(50), "nope").unwrap_err();
        assert!(matches!(
            err,
            AxesError::Frame(FrameError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let engine = AxesEngine::default();
        let f = frame(300);
        assert_eq!(
            engine.compute_axes(&f, "a").unwrap(),
            engine.compute_axes_parallel(&f, "a").unwrap()
        );
    }

    #[test]
    fn test_axes_only_report_metadata() {
        let report = AxesEngine::default().compute_full(&frame(60), None, "a").unwrap();
        assert_eq!(report.metadata.analysis_type, ANALYSIS_AXES);
        assert_eq!(report.metadata.base_samples, 60);
        assert_eq!(report.metadata.shifted_samples, None);
        assert_eq!(report.metadata.min_samples_required, 200);
        assert!(report.retention_metrics.is_none());
        assert!(report.shift_intensity_features.is_none());
    }
}
