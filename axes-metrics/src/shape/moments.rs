//! Skewness/kurtosis score and Tukey-fence outlier impact.

use axes_core::errors::MetricError;

use crate::utils::{quantile, safe_ratio, safe_variance, sorted_finite};

const MIN_MOMENT_SAMPLES: usize = 4;

/// `|G1| + |G2|`: adjusted Fisher-Pearson skewness plus bias-corrected
/// excess kurtosis. A zero-variance sample scores `0.0`.
pub fn sk_k_score(values: &[f64]) -> Result<f64, MetricError> {
    let n = values.len();
    if n < MIN_MOMENT_SAMPLES {
        return Err(MetricError::insufficient(MIN_MOMENT_SAMPLES, n));
    }
    let nf = n as f64;
    let mean = values.iter().sum::<f64>() / nf;
    let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);
    for &v in values {
        let d = v - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }
    m2 /= nf;
    m3 /= nf;
    m4 /= nf;
    if m2 <= f64::EPSILON * mean.abs().max(1.0) {
        return Ok(0.0);
    }

    let g1 = m3 / m2.powf(1.5);
    let g2 = m4 / (m2 * m2) - 3.0;
    let skew = g1 * (nf * (nf - 1.0)).sqrt() / (nf - 2.0);
    let kurt = ((nf + 1.0) * g2 + 6.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0));

    crate::utils::ensure_finite(skew.abs() + kurt.abs(), "sk_k_score")
}

/// Relative drop in sample variance after removing values beyond the
/// Tukey fences `[Q1 - k*IQR, Q3 + k*IQR]`, clamped to `[0, 1]`.
pub fn outlier_impact(values: &[f64], multiplier: f64) -> Result<f64, MetricError> {
    if values.len() < MIN_MOMENT_SAMPLES {
        return Err(MetricError::insufficient(MIN_MOMENT_SAMPLES, values.len()));
    }
    let var_all = safe_variance(values);
    if var_all <= 0.0 {
        return Ok(0.0);
    }

    let sorted = sorted_finite(values);
    let q1 = quantile(&sorted, 0.25);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - multiplier * iqr;
    let upper_fence = q3 + multiplier * iqr;

    let trimmed: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|&v| v >= lower_fence && v <= upper_fence)
        .collect();
    if trimmed.len() == sorted.len() {
        return Ok(0.0);
    }
    let var_trimmed = safe_variance(&trimmed);

    Ok(safe_ratio(var_all - var_trimmed, var_all).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_sample_has_low_skew() {
        let values: Vec<f64> = (-50..=50).map(f64::from).collect();
        let score = sk_k_score(&values).unwrap();
        // Uniform: skew 0, excess kurtosis about -1.2
        assert!((score - 1.2).abs() < 0.05, "score = {score}");
    }

    #[test]
    fn test_heavy_tail_scores_high() {
        let mut values = vec![0.0; 95];
        values.extend([50.0, 60.0, 70.0, 80.0, 90.0]);
        assert!(sk_k_score(&values).unwrap() > 5.0);
    }

    #[test]
    fn test_constant_and_short_samples() {
        assert_eq!(sk_k_score(&[3.0; 10]).unwrap(), 0.0);
        assert!(sk_k_score(&[1.0, 2.0, 3.0]).is_err());
        assert_eq!(outlier_impact(&[3.0; 10], 1.5).unwrap(), 0.0);
        assert!(outlier_impact(&[1.0, 2.0], 1.5).is_err());
    }

    #[test]
    fn test_outlier_impact_single_spike() {
        let mut values: Vec<f64> = (0..99).map(|i| (i % 10) as f64).collect();
        values.push(1000.0);
        let impact = outlier_impact(&values, 1.5).unwrap();
        assert!(impact > 0.9, "impact = {impact}");
    }

    #[test]
    fn test_outlier_impact_clean_sample() {
        let values: Vec<f64> = (0..100).map(|i| (i % 10) as f64).collect();
        assert_eq!(outlier_impact(&values, 1.5).unwrap(), 0.0);
    }
}
