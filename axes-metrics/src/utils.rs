//! Numeric-safety primitives shared by every axis.
//!
//! Every helper is total: degenerate input yields a defined fallback,
//! never a panic or a NaN.

use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use axes_core::constants::EPSILON;
use axes_core::errors::{AxesErrorCode, MetricError};
use axes_core::frame::{Cell, Series};
use statrs::statistics::Statistics;
use tracing::{debug, warn};

/// Coerce raw cells to a numeric series; invalid entries become missing.
pub fn coerce_numeric(cells: &[Cell]) -> Series {
    Series::new(cells.iter().map(Cell::to_number).collect())
}

/// Sample variance (ddof = 1), or `0.0` when it is not finite
/// (fewer than two observations).
pub fn safe_variance(values: &[f64]) -> f64 {
    let v = values.variance();
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// `a / (b + EPSILON)`.
pub fn safe_ratio(a: f64, b: f64) -> f64 {
    safe_ratio_eps(a, b, EPSILON)
}

/// `a / (b + eps)`; a non-finite result collapses to `0.0`.
pub fn safe_ratio_eps(a: f64, b: f64, eps: f64) -> f64 {
    let r = a / (b + eps);
    if r.is_finite() {
        r
    } else {
        0.0
    }
}

/// Split at `len / 2`; for odd lengths the first half is the smaller one.
pub fn half_split<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len() / 2)
}

/// True iff the collection holds at least `min_len` items.
pub fn guard_min_length<T>(items: &[T], min_len: usize) -> bool {
    items.len() >= min_len
}

/// `Some(x)` only for finite values.
pub fn finite(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

/// Reject a non-finite intermediate result.
pub fn ensure_finite(x: f64, what: &str) -> Result<f64, MetricError> {
    finite(x).ok_or_else(|| MetricError::Failed {
        reason: format!("{what} is not finite"),
    })
}

/// Sort a copy of the values ascending, dropping non-finite entries.
pub fn sorted_finite(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Quantile of sorted data using linear interpolation between closest ranks.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    if upper >= sorted.len() {
        sorted[sorted.len() - 1]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

/// `bin_count + 1` evenly spaced quantiles from 0 to 1, sorted and deduplicated.
///
/// The result brackets the data (first edge is the minimum, last the maximum)
/// and shrinks below `bin_count + 1` edges when values repeat.
pub fn quantile_bins(values: &[f64], bin_count: usize) -> Vec<f64> {
    let sorted = sorted_finite(values);
    if sorted.is_empty() || bin_count == 0 {
        return Vec::new();
    }
    let mut edges: Vec<f64> = (0..=bin_count)
        .map(|i| quantile(&sorted, i as f64 / bin_count as f64))
        .collect();
    edges.sort_by(f64::total_cmp);
    edges.dedup();
    edges
}

/// Evaluate a metric computation, converting any error or panic into `None`.
///
/// Guard-style failures are logged at `debug`, everything else at `warn`,
/// so the finer unavailable-due-to-guard / due-to-error distinction
/// survives in the logs while the record stays two-valued.
pub fn try_or_none<T, E, F>(label: &str, f: F) -> Option<T>
where
    E: Display + AxesErrorCode,
    F: FnOnce() -> Result<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            match e.error_code() {
                axes_core::errors::error_code::INSUFFICIENT_DATA
                | axes_core::errors::error_code::DEGENERATE_INPUT => {
                    debug!(metric = label, code = e.error_code(), reason = %e, "metric unavailable");
                }
                code => {
                    warn!(metric = label, code, reason = %e, "metric computation failed");
                }
            }
            None
        }
        Err(_) => {
            warn!(metric = label, "metric computation panicked");
            None
        }
    }
}
