//! Column-wise standardization to zero mean and unit population variance.

use statrs::statistics::Statistics;

/// Standardize row-major data in place. Zero-variance columns are only
/// centred (scaled by 1).
///
/// Each column is first divided by its largest magnitude, so sums over
/// values near `f64::MAX` cannot overflow.
pub fn standardize(rows: &mut [Vec<f64>]) {
    let Some(width) = rows.first().map(Vec::len) else {
        return;
    };

    for j in 0..width {
        let max_abs = rows.iter().map(|r| r[j].abs()).fold(0.0, f64::max);
        let unit = if max_abs > 0.0 && max_abs.is_finite() {
            max_abs
        } else {
            1.0
        };
        let scaled: Vec<f64> = rows.iter().map(|r| r[j] / unit).collect();
        let mean = scaled.iter().mean();
        let std = scaled.iter().population_std_dev();
        let scale = if std > 0.0 && std.is_finite() { std } else { 1.0 };
        for (row, v) in rows.iter_mut().zip(&scaled) {
            row[j] = (v - mean) / scale;
        }
    }
}

/// Column means of row-major data.
pub fn centroid(rows: &[Vec<f64>]) -> Vec<f64> {
    let width = rows.first().map_or(0, Vec::len);
    let mut centre = vec![0.0; width];
    for row in rows {
        for (c, v) in centre.iter_mut().zip(row) {
            *c += v;
        }
    }
    let n = rows.len().max(1) as f64;
    centre.iter_mut().for_each(|c| *c /= n);
    centre
}

pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    squared_euclidean(a, b).sqrt()
}

pub fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}
