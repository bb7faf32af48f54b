//! Seeded k-means: k-means++ seeding, Lloyd iterations, best of `n_init`.

use axes_core::errors::MetricError;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::scaler::squared_euclidean;

/// Convergence threshold on the total squared centre shift.
const TOLERANCE: f64 = 1e-4;

/// A fitted clustering.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit {
    pub centers: Vec<Vec<f64>>,
    pub labels: Vec<usize>,
    pub inertia: f64,
}

/// Cluster `rows` into `k` groups; the restart with the lowest inertia wins.
pub fn fit(
    rows: &[Vec<f64>],
    k: usize,
    n_init: usize,
    max_iter: usize,
    seed: u64,
) -> Result<KMeansFit, MetricError> {
    if k == 0 {
        return Err(MetricError::degenerate("k must be positive"));
    }
    if rows.len() < k {
        return Err(MetricError::insufficient(k, rows.len()));
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut best: Option<KMeansFit> = None;
    for _ in 0..n_init.max(1) {
        let centers = plus_plus_init(rows, k, &mut rng);
        let run = lloyd(rows, centers, max_iter);
        if best.as_ref().map_or(true, |b| run.inertia < b.inertia) {
            best = Some(run);
        }
    }
    best.ok_or_else(|| MetricError::Failed {
        reason: "k-means produced no run".to_string(),
    })
}

/// k-means++: first centre uniform, each next one drawn with probability
/// proportional to the squared distance from the nearest chosen centre.
fn plus_plus_init(rows: &[Vec<f64>], k: usize, rng: &mut Xoshiro256PlusPlus) -> Vec<Vec<f64>> {
    let mut centers = Vec::with_capacity(k);
    centers.push(rows[rng.gen_range(0..rows.len())].clone());

    let mut nearest: Vec<f64> = rows.iter().map(|r| squared_euclidean(r, &centers[0])).collect();
    while centers.len() < k {
        let total: f64 = nearest.iter().sum();
        let idx = if total > 0.0 && total.is_finite() {
            let mut target = rng.gen::<f64>() * total;
            let mut chosen = rows.len() - 1;
            for (i, d) in nearest.iter().enumerate() {
                if target < *d {
                    chosen = i;
                    break;
                }
                target -= d;
            }
            chosen
        } else {
            rng.gen_range(0..rows.len())
        };
        let center = rows[idx].clone();
        for (d, row) in nearest.iter_mut().zip(rows) {
            *d = d.min(squared_euclidean(row, &center));
        }
        centers.push(center);
    }
    centers
}

fn lloyd(rows: &[Vec<f64>], mut centers: Vec<Vec<f64>>, max_iter: usize) -> KMeansFit {
    let k = centers.len();
    let width = centers[0].len();
    let mut labels = assign(rows, &centers);

    for _ in 0..max_iter {
        let mut sums = vec![vec![0.0; width]; k];
        let mut counts = vec![0usize; k];
        for (row, &label) in rows.iter().zip(&labels) {
            counts[label] += 1;
            for (s, v) in sums[label].iter_mut().zip(row) {
                *s += v;
            }
        }

        let mut shift = 0.0;
        for c in 0..k {
            // An emptied cluster keeps its previous centre.
            if counts[c] == 0 {
                continue;
            }
            let updated: Vec<f64> = sums[c].iter().map(|s| s / counts[c] as f64).collect();
            shift += squared_euclidean(&updated, &centers[c]);
            centers[c] = updated;
        }

        labels = assign(rows, &centers);
        if shift <= TOLERANCE {
            break;
        }
    }

    let inertia = rows
        .iter()
        .zip(&labels)
        .map(|(row, &label)| squared_euclidean(row, &centers[label]))
        .sum();
    KMeansFit {
        centers,
        labels,
        inertia,
    }
}

fn assign(rows: &[Vec<f64>], centers: &[Vec<f64>]) -> Vec<usize> {
    rows.iter()
        .map(|row| {
            let mut best = 0;
            let mut best_dist = f64::INFINITY;
            for (c, center) in centers.iter().enumerate() {
                let d = squared_euclidean(row, center);
                if d < best_dist {
                    best_dist = d;
                    best = c;
                }
            }
            best
        })
        .collect()
}
