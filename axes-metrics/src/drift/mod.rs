//! Drift axis: distribution shift between a baseline and a current sample.
//!
//! Two strategies:
//! - `BinShift` (default): half-split the series, count baseline quantile
//!   bins whose PSI contribution crosses a threshold
//! - `RollingWindow`: compare every rolling window against the baseline

pub mod psi;
pub mod strategies;

pub use psi::{population_stability_index, PsiBins};

use axes_core::config::{DriftConfig, DriftStrategy};
use axes_core::drift_span;
use axes_core::frame::Series;
use axes_core::models::DriftMetrics;
use tracing::debug;

use crate::utils::{guard_min_length, half_split, try_or_none};

/// Drift of a single series against itself: first half is the baseline,
/// second half the current sample.
///
/// With the rolling-window strategy the whole series is the baseline and its
/// own windows are the current samples.
pub fn compute_drift_metrics(series: &Series, config: &DriftConfig) -> DriftMetrics {
    match config.strategy {
        DriftStrategy::BinShift => {
            if !guard_min_length(series.as_slice(), config.min_len) {
                debug!(len = series.len(), min_len = config.min_len, "series too short for drift");
                return DriftMetrics::default();
            }
            let (baseline, current) = half_split(series.as_slice());
            drift_between_values(&valid(baseline), &valid(current), config)
        }
        DriftStrategy::RollingWindow => {
            let values = series.valid();
            drift_between_values(&values, &values, config)
        }
    }
}

/// Drift of `current` against an explicit `baseline`.
pub fn compute_drift_between(baseline: &Series, current: &Series, config: &DriftConfig) -> DriftMetrics {
    drift_between_values(&baseline.valid(), &current.valid(), config)
}

fn drift_between_values(baseline: &[f64], current: &[f64], config: &DriftConfig) -> DriftMetrics {
    let _span = drift_span!(baseline.len(), current.len()).entered();

    let rate = try_or_none("psi_trigger_rate", || match config.strategy {
        DriftStrategy::BinShift => strategies::bin_shift_rate(baseline, current, config),
        DriftStrategy::RollingWindow => strategies::rolling_window_rate(baseline, current, config),
    })
    .filter(|r| r.is_finite())
    .map(|r| r.clamp(0.0, 1.0))
    .unwrap_or(0.0);

    debug!(psi_trigger_rate = rate, strategy = ?config.strategy, "drift metrics computed");
    DriftMetrics {
        psi_trigger_rate: rate,
    }
}

fn valid(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().flatten().copied().collect()
}
