//! Approximate multimodality statistic from a Gaussian KDE.
//!
//! `0` means unimodal; larger values mean deeper valleys between more peaks.

use axes_core::errors::MetricError;
use statrs::statistics::Statistics;

/// Dip-like statistic of `values` evaluated on a `grid_size` grid.
///
/// `Err(InsufficientData)` below `min_samples`; `0.0` with fewer than three
/// distinct values or a single density peak.
pub fn approximate_dip(values: &[f64], min_samples: usize, grid_size: usize) -> Result<f64, MetricError> {
    let n = values.len();
    if n < min_samples {
        return Err(MetricError::insufficient(min_samples, n));
    }
    if distinct_count(values) < 3 || grid_size < 3 {
        return Ok(0.0);
    }

    let (lo, hi) = (values.min(), values.max());
    let bandwidth = values.population_std_dev() * (n as f64).powf(-0.2);
    if lo >= hi || bandwidth <= 0.0 || !bandwidth.is_finite() {
        return Ok(0.0);
    }

    let step = (hi - lo) / (grid_size - 1) as f64;
    if !step.is_finite() {
        return Err(MetricError::degenerate("value range overflows the KDE grid"));
    }
    let density: Vec<f64> = (0..grid_size)
        .map(|i| kde(values, lo + step * i as f64, bandwidth))
        .collect();

    let (peaks, valleys) = extrema(&density);
    if peaks.len() <= 1 || valleys.is_empty() {
        return Ok(0.0);
    }

    let depths: Vec<f64> = valleys
        .iter()
        .filter_map(|&v| {
            let left = peaks.iter().rev().find(|&&p| p < v)?;
            let right = peaks.iter().find(|&&p| p > v)?;
            let avg_peak = (density[*left] + density[*right]) / 2.0;
            (avg_peak > 0.0).then(|| (avg_peak - density[v]) / avg_peak)
        })
        .collect();
    if depths.is_empty() {
        return Ok(0.0);
    }

    let avg_depth = depths.iter().sum::<f64>() / depths.len() as f64;
    let max_density = density.iter().copied().fold(0.0, f64::max);
    let normalized = if max_density > 0.0 {
        avg_depth / max_density
    } else {
        avg_depth
    };
    let dip = normalized.clamp(0.0, 1.0) * (peaks.len() - 1) as f64 * 0.5;
    crate::utils::ensure_finite(dip, "dip_stat")
}

fn kde(values: &[f64], at: f64, bandwidth: f64) -> f64 {
    let sum: f64 = values
        .iter()
        .map(|&x| {
            let z = (x - at) / bandwidth;
            (-0.5 * z * z).exp()
        })
        .sum();
    sum / values.len() as f64 / bandwidth
}

fn distinct_count(values: &[f64]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted.len()
}

/// Grid indices of local maxima and minima, from sign changes of the
/// first difference. Flat steps count as a zero slope.
fn extrema(density: &[f64]) -> (Vec<usize>, Vec<usize>) {
    let slopes: Vec<f64> = density
        .windows(2)
        .map(|w| {
            let d = w[1] - w[0];
            if d > 0.0 {
                1.0
            } else if d < 0.0 {
                -1.0
            } else {
                0.0
            }
        })
        .collect();

    let mut peaks = Vec::new();
    let mut valleys = Vec::new();
    for (i, w) in slopes.windows(2).enumerate() {
        let change = w[1] - w[0];
        if change < 0.0 {
            peaks.push(i + 1);
        } else if change > 0.0 {
            valleys.push(i + 1);
        }
    }
    (peaks, valleys)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gaussian_like(n: usize, centre: f64, spread: f64) -> Vec<f64> {
        // Deterministic bell-shaped sample: quantiles of a triangular mix.
        (0..n)
            .map(|i| {
                let u = (i as f64 + 0.5) / n as f64;
                let t = (u - 0.5) * 2.0;
                centre + spread * t * t.abs()
            })
            .collect()
    }

    #[test]
    fn test_too_few_samples() {
        assert!(matches!(
            approximate_dip(&[1.0; 10], 40, 256),
            Err(MetricError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_few_distinct_values() {
        let values: Vec<f64> = (0..100).map(|i| (i % 2) as f64).collect();
        assert_eq!(approximate_dip(&values, 40, 256).unwrap(), 0.0);
    }

    #[test]
    fn test_unimodal_is_zero() {
        let values = gaussian_like(200, 0.0, 3.0);
        assert_eq!(approximate_dip(&values, 40, 256).unwrap(), 0.0);
    }

    #[test]
    fn test_bimodal_is_positive() {
        let mut values = gaussian_like(200, 0.0, 1.0);
        values.extend(gaussian_like(200, 20.0, 1.0));
        let dip = approximate_dip(&values, 40, 256).unwrap();
        assert!(dip > 0.0, "dip = {dip}");
        assert!(dip <= 1.0);
    }

    #[test]
    fn test_extrema_detects_peak_and_valley() {
        let (peaks, valleys) = extrema(&[0.0, 1.0, 0.5, 2.0, 0.0]);
        assert_eq!(peaks, vec![1, 3]);
        assert_eq!(valleys, vec![2]);
    }
}
