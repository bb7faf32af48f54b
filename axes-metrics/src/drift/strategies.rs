//! Trigger-rate strategies: per-bin shift and rolling-window PSI.

use axes_core::config::DriftConfig;
use axes_core::errors::MetricError;

use super::psi::PsiBins;

/// Fraction of baseline quantile bins whose PSI contribution exceeds
/// `bin_threshold`.
pub fn bin_shift_rate(
    baseline: &[f64],
    current: &[f64],
    config: &DriftConfig,
) -> Result<f64, MetricError> {
    check_samples(baseline, current, config.min_samples)?;
    let bins = PsiBins::from_quantiles(baseline, config.bin_count, 2)
        .ok_or_else(|| MetricError::degenerate("baseline quantile edges collapse below two bins"))?;

    let contributions = bins.contributions(current);
    let drifted = contributions
        .iter()
        .filter(|&&c| c > config.bin_threshold)
        .count();
    Ok(drifted as f64 / bins.bin_count() as f64)
}

/// Fraction of rolling windows of `current` whose PSI against the whole of
/// `baseline` exceeds `psi_threshold`.
pub fn rolling_window_rate(
    baseline: &[f64],
    current: &[f64],
    config: &DriftConfig,
) -> Result<f64, MetricError> {
    check_samples(baseline, current, config.min_samples)?;
    if current.len() < config.window_size {
        return Err(MetricError::insufficient(config.window_size, current.len()));
    }
    let bins = PsiBins::from_quantiles(baseline, config.bin_count, 1)
        .ok_or_else(|| MetricError::degenerate("baseline has zero variance"))?;

    let mut total = 0usize;
    let mut triggered = 0usize;
    for window in current.windows(config.window_size) {
        let psi = bins.psi(window);
        if !psi.is_finite() {
            continue;
        }
        total += 1;
        if psi > config.psi_threshold {
            triggered += 1;
        }
    }
    if total == 0 {
        return Err(MetricError::degenerate("no window produced a finite PSI"));
    }
    Ok(triggered as f64 / total as f64)
}

fn check_samples(baseline: &[f64], current: &[f64], min_samples: usize) -> Result<(), MetricError> {
    let available = baseline.len().min(current.len());
    if available < min_samples {
        return Err(MetricError::insufficient(min_samples, available));
    }
    Ok(())
}
