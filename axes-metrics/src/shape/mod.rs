//! Shape axis: tail weight, outlier sensitivity, multimodality.

pub mod dip;
pub mod moments;

pub use dip::approximate_dip;
pub use moments::{outlier_impact, sk_k_score};

use axes_core::config::ShapeConfig;
use axes_core::frame::Series;
use axes_core::models::ShapeMetrics;
use axes_core::shape_span;
use tracing::debug;

use crate::utils::try_or_none;

/// Compute `sk_k_score`, `outlier_impact` and `dip_stat` over the valid values.
pub fn compute_shape_metrics(series: &Series, config: &ShapeConfig) -> ShapeMetrics {
    let _span = shape_span!(series.len()).entered();
    let values = series.valid();

    let metrics = ShapeMetrics {
        sk_k_score: try_or_none("sk_k_score", || sk_k_score(&values)),
        outlier_impact: try_or_none("outlier_impact", || {
            outlier_impact(&values, config.iqr_multiplier)
        }),
        dip_stat: try_or_none("dip_stat", || {
            approximate_dip(&values, config.dip_min_samples, config.dip_grid_size)
        }),
    };
    debug!(?metrics, "shape metrics computed");
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{bimodal_values, constant_series};

    #[test]
    fn test_empty_series_is_unavailable() {
        let m = compute_shape_metrics(&Series::default(), &ShapeConfig::default());
        assert_eq!(m, ShapeMetrics::default());
        assert!(m.sk_k_score.is_none() && m.dip_stat.is_none());
    }

    #[test]
    fn test_constant_series() {
        let m = compute_shape_metrics(&constant_series(100, 4.0), &ShapeConfig::default());
        assert_eq!(m.sk_k_score, Some(0.0));
        assert_eq!(m.outlier_impact, Some(0.0));
        assert_eq!(m.dip_stat, Some(0.0));
    }

    #[test]
    fn test_bimodal_sample_has_positive_dip() {
        let bimodal = Series::from_values(&bimodal_values(400, 8.0, 3));
        let m = compute_shape_metrics(&bimodal, &ShapeConfig::default());
        let dip = m.dip_stat.unwrap();
        assert!(dip > 0.0, "dip = {dip}");
        // Two equal, well separated modes: light tails, negative excess kurtosis.
        assert!(m.sk_k_score.unwrap() > 1.0);
    }

    #[test]
    fn test_short_series_has_moments_but_no_dip() {
        let values: Vec<f64> = (0..20).map(f64::from).collect();
        let m = compute_shape_metrics(&Series::from_values(&values), &ShapeConfig::default());
        assert!(m.sk_k_score.is_some());
        assert!(m.outlier_impact.is_some());
        assert_eq!(m.dip_stat, None);
    }
}
