//! Temporal stability axis: short-term variance ratio and seasonal autocorrelation.

use axes_core::config::TemporalConfig;
use axes_core::errors::MetricError;
use axes_core::frame::Series;
use axes_core::models::TemporalMetrics;
use axes_core::temporal_span;
use tracing::debug;

use crate::utils::{self, safe_ratio, safe_variance, try_or_none};

/// Compute `st_var_ratio` and `seasonal_corr` for one series.
pub fn compute_temporal_metrics(series: &Series, config: &TemporalConfig) -> TemporalMetrics {
    let _span = temporal_span!(series.len()).entered();

    let st_var_ratio = try_or_none("st_var_ratio", || {
        short_term_variance_ratio(series, config.window, config.min_periods)
    });
    let seasonal_corr = try_or_none("seasonal_corr", || {
        autocorrelation(series.as_slice(), config.seasonal_lag)
    });

    debug!(?st_var_ratio, ?seasonal_corr, "temporal metrics computed");
    TemporalMetrics {
        st_var_ratio,
        seasonal_corr,
    }
}

/// Mean rolling variance over global variance, stabilized by epsilon.
///
/// Each trailing window ending at every position contributes its sample
/// variance only if it holds at least `min_periods` valid observations
/// (and at least two); other windows are skipped.
pub fn short_term_variance_ratio(
    series: &Series,
    window: usize,
    min_periods: usize,
) -> Result<f64, MetricError> {
    let global_variance = safe_variance(&series.valid());
    let rolling = rolling_variances(series.as_slice(), window, min_periods);
    if rolling.is_empty() {
        return Err(MetricError::insufficient(
            min_periods.max(2),
            series.valid_count().min(window),
        ));
    }
    let rolling_variance = rolling.iter().sum::<f64>() / rolling.len() as f64;
    utils::ensure_finite(safe_ratio(rolling_variance, global_variance), "st_var_ratio")
}

/// Sample variance of each qualifying trailing window.
pub fn rolling_variances(values: &[Option<f64>], window: usize, min_periods: usize) -> Vec<f64> {
    if window == 0 {
        return Vec::new();
    }
    let required = min_periods.max(2);
    let mut out = Vec::new();
    let mut buf = Vec::with_capacity(window);
    for end in 0..values.len() {
        let start = (end + 1).saturating_sub(window);
        buf.clear();
        buf.extend(values[start..=end].iter().flatten().copied());
        if buf.len() >= required {
            out.push(safe_variance(&buf));
        }
    }
    out
}

/// Pearson correlation between the series and itself shifted by `lag`,
/// over pairs where both observations are present.
pub fn autocorrelation(values: &[Option<f64>], lag: usize) -> Result<f64, MetricError> {
    if values.len() < lag + 1 {
        return Err(MetricError::insufficient(lag + 1, values.len()));
    }
    let pairs: Vec<(f64, f64)> = (lag..values.len())
        .filter_map(|i| Some((values[i]?, values[i - lag]?)))
        .collect();
    if pairs.len() < 2 {
        return Err(MetricError::insufficient(2, pairs.len()));
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;
    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x <= 0.0 || var_y <= 0.0 {
        return Err(MetricError::degenerate("constant series has no autocorrelation"));
    }
    let r = cov / (var_x.sqrt() * var_y.sqrt());
    utils::ensure_finite(r.clamp(-1.0, 1.0), "seasonal_corr")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{constant_series, seasonal_series};

    fn periodic(n: usize, period: usize) -> Series {
        let values: Vec<f64> = (0..n)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 / period as f64).sin())
            .collect();
        Series::from_values(&values)
    }

    #[test]
    fn test_constant_series() {
        let m = compute_temporal_metrics(&constant_series(100, 5.0), &TemporalConfig::default());
        assert_eq!(m.st_var_ratio, Some(0.0));
        assert_eq!(m.seasonal_corr, None);
    }

    #[test]
    fn test_periodic_series_has_strong_seasonal_corr() {
        let m = compute_temporal_metrics(&periodic(240, 24), &TemporalConfig::default());
        let corr = m.seasonal_corr.unwrap();
        assert!(corr > 0.99, "corr = {corr}");
    }

    #[test]
    fn test_noisy_seasonal_series() {
        let m = compute_temporal_metrics(&seasonal_series(480, 24, 9), &TemporalConfig::default());
        let corr = m.seasonal_corr.unwrap();
        assert!(corr > 0.9, "corr = {corr}");
        assert!(m.st_var_ratio.unwrap() > 0.5);
    }

    #[test]
    fn test_stationary_noise_ratio_near_one() {
        // Alternating pattern: every full window has the same variance as the whole.
        let values: Vec<f64> = (0..200).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let ratio = short_term_variance_ratio(&Series::from_values(&values), 24, 5).unwrap();
        assert!((ratio - 1.0).abs() < 0.1, "ratio = {ratio}");
    }

    #[test]
    fn test_regime_shift_suppresses_local_variance() {
        let mut values = vec![0.0; 100];
        values.extend(vec![10.0; 100]);
        let ratio = short_term_variance_ratio(&Series::from_values(&values), 24, 5).unwrap();
        assert!(ratio < 0.5, "ratio = {ratio}");
    }

    #[test]
    fn test_sparse_windows_fall_back_to_unavailable() {
        // One valid observation every 30 positions: no window reaches min_periods.
        let values: Vec<Option<f64>> = (0..300)
            .map(|i| (i % 30 == 0).then_some(i as f64))
            .collect();
        let m = compute_temporal_metrics(&Series::new(values), &TemporalConfig::default());
        assert_eq!(m.st_var_ratio, None);
    }

    #[test]
    fn test_short_series_has_no_seasonal_corr() {
        let series = Series::from_values(&(0..24).map(f64::from).collect::<Vec<_>>());
        let m = compute_temporal_metrics(&series, &TemporalConfig::default());
        assert_eq!(m.seasonal_corr, None);
        assert!(m.st_var_ratio.is_some());
    }

    #[test]
    fn test_rolling_skips_windows_below_min_periods() {
        let values = [Some(1.0), Some(2.0), Some(3.0)];
        // window 2: positions 1 and 2 qualify (position 0 has one value)
        assert_eq!(rolling_variances(&values, 2, 2).len(), 2);
        assert!(rolling_variances(&values, 2, 3).is_empty());
    }
}
