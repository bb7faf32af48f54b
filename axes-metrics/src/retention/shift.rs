//! Per-feature shift intensity: KS distance and mean difference between snapshots.

use axes_core::config::RetentionConfig;
use axes_core::frame::{Column, FeatureMatrix};
use axes_core::models::FeatureShift;
use rayon::prelude::*;
use statrs::statistics::Statistics;
use tracing::debug;

use crate::utils::sorted_finite;

/// Two-sample Kolmogorov-Smirnov statistic: the largest gap between the
/// empirical CDFs. `0.0` when either sample is empty.
pub fn ks_statistic(a: &[f64], b: &[f64]) -> f64 {
    let a = sorted_finite(a);
    let b = sorted_finite(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (n, m) = (a.len() as f64, b.len() as f64);

    let (mut i, mut j) = (0, 0);
    let mut d: f64 = 0.0;
    while i < a.len() && j < b.len() {
        let x = a[i].min(b[j]);
        while i < a.len() && a[i] <= x {
            i += 1;
        }
        while j < b.len() && b[j] <= x {
            j += 1;
        }
        d = d.max((i as f64 / n - j as f64 / m).abs());
    }
    d
}

/// The `shift_top_k` numeric features of `base` (target excluded) present in
/// `shift`, ranked by KS distance. Ties keep column order.
///
/// A feature with `ks_min_samples` or fewer valid values on either side
/// scores `0.0`; one without a finite mean on either side is skipped.
pub fn feature_shift_intensity(
    base: &FeatureMatrix,
    shift: &FeatureMatrix,
    config: &RetentionConfig,
) -> Vec<FeatureShift> {
    let target = &base.last_column().name;
    let pairs: Vec<(&Column, &Column)> = base
        .numeric_columns()
        .filter(|c| &c.name != target)
        .filter_map(|c| Some((c, shift.column(&c.name).filter(|s| s.is_numeric())?)))
        .collect();

    let mut shifts: Vec<FeatureShift> = pairs
        .par_iter()
        .filter_map(|(b, s)| column_shift(b, s, config.ks_min_samples))
        .collect();
    shifts.sort_by(|x, y| y.ks_stat.total_cmp(&x.ks_stat));
    shifts.truncate(config.shift_top_k);

    debug!(
        candidates = pairs.len(),
        reported = shifts.len(),
        "feature shift intensity computed"
    );
    shifts
}

fn column_shift(base: &Column, shift: &Column, ks_min_samples: usize) -> Option<FeatureShift> {
    let b = base.to_series().valid();
    let s = shift.to_series().valid();
    if b.is_empty() || s.is_empty() {
        return None;
    }
    let mean_diff = s.iter().mean() - b.iter().mean();
    if !mean_diff.is_finite() {
        debug!(feature = %base.name, "mean difference is not finite, skipping");
        return None;
    }
    let ks_stat = if b.len() > ks_min_samples && s.len() > ks_min_samples {
        ks_statistic(&b, &s)
    } else {
        0.0
    };
    Some(FeatureShift {
        feature: base.name.clone(),
        ks_stat,
        mean_diff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::normal_values;

    #[test]
    fn test_ks_identical_and_disjoint() {
        let x: Vec<f64> = (0..50).map(f64::from).collect();
        assert_eq!(ks_statistic(&x, &x), 0.0);
        let far: Vec<f64> = (100..150).map(f64::from).collect();
        assert_eq!(ks_statistic(&x, &far), 1.0);
        assert_eq!(ks_statistic(&[], &x), 0.0);
    }

    #[test]
    fn test_ks_partial_overlap() {
        // [0, 4) vs [2, 6): CDF gap peaks at 0.5 between 1 and 2.
        let a = [0.0, 1.0, 2.0, 3.0];
        let b = [2.0, 3.0, 4.0, 5.0];
        assert!((ks_statistic(&a, &b) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_ks_with_ties() {
        let a = [1.0, 1.0, 2.0, 2.0];
        let b = [1.0, 2.0, 2.0, 2.0];
        assert!((ks_statistic(&a, &b) - 0.25).abs() < 1e-12);
    }

    fn snapshot(moved: f64, seed: u64) -> FeatureMatrix {
        let rows = 200;
        let target: Vec<f64> = (0..rows).map(|i| (i % 2) as f64).collect();
        // Only 20 valid values: below the KS minimum.
        let mut sparse = normal_values(20, moved, 1.0, seed + 2);
        sparse.resize(rows, f64::NAN);
        FeatureMatrix::new(vec![
            Column::numeric("steady", &normal_values(rows, 0.0, 1.0, seed)),
            Column::numeric("moved", &normal_values(rows, moved, 1.0, seed + 1)),
            Column::numeric("sparse", &sparse),
            Column::numeric("target", &target),
        ])
        .unwrap()
    }

    #[test]
    fn test_ranks_moved_feature_first() {
        let shifts = feature_shift_intensity(
            &snapshot(0.0, 1),
            &snapshot(3.0, 10),
            &RetentionConfig::default(),
        );
        let names: Vec<&str> = shifts.iter().map(|s| s.feature.as_str()).collect();
        assert_eq!(names, ["moved", "steady", "sparse"]);
        assert!(shifts[0].ks_stat > 0.8);
        assert!((shifts[0].mean_diff - 3.0).abs() < 0.5);
        assert_eq!(shifts[2].ks_stat, 0.0);
        assert!(!names.contains(&"target"));
    }

    #[test]
    fn test_top_k_truncates() {
        let config = RetentionConfig {
            shift_top_k: 1,
            ..RetentionConfig::default()
        };
        let shifts = feature_shift_intensity(&snapshot(0.0, 1), &snapshot(3.0, 10), &config);
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].feature, "moved");
    }
}
