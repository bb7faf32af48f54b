//! Density axis: cluster compactness and separation over the feature matrix.

pub mod kmeans;
pub mod scaler;

use axes_core::config::DensityConfig;
use axes_core::constants::EPSILON;
use axes_core::density_span;
use axes_core::errors::MetricError;
use axes_core::frame::{Column, FeatureMatrix};
use axes_core::models::DensityMetrics;
use rayon::prelude::*;
use tracing::debug;

use crate::utils::{ensure_finite, try_or_none};
use scaler::{centroid, euclidean};

/// Score of one candidate cluster count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterScore {
    pub k: usize,
    /// Twice the mean distance from each row to its own centre.
    pub intra: f64,
    /// Mean pairwise distance between centres.
    pub inter: f64,
    pub silhouette: f64,
}

/// Compute `intra_cluster_density`, `silhouette_approx` and `density_k`.
pub fn compute_density_metrics(matrix: &FeatureMatrix, config: &DensityConfig) -> DensityMetrics {
    let _span = density_span!(matrix.n_rows(), matrix.n_columns()).entered();
    let metrics = try_or_none("density", || density_metrics(matrix, config))
        .unwrap_or_else(DensityMetrics::unavailable);
    debug!(?metrics, "density metrics computed");
    metrics
}

fn density_metrics(matrix: &FeatureMatrix, config: &DensityConfig) -> Result<DensityMetrics, MetricError> {
    let features = feature_columns(matrix);
    if features.len() < 2 {
        return Err(MetricError::insufficient(2, features.len()));
    }
    if matrix.n_rows() < config.min_samples {
        return Err(MetricError::insufficient(config.min_samples, matrix.n_rows()));
    }

    let mut rows = complete_rows(&features, matrix.n_rows());
    if rows.len() < config.min_samples {
        return Err(MetricError::insufficient(config.min_samples, rows.len()));
    }
    scaler::standardize(&mut rows);

    let global_centre = centroid(&rows);
    let global_ref = 2.0 * rows.iter().map(|r| euclidean(r, &global_centre)).sum::<f64>()
        / rows.len() as f64;

    let scores: Vec<ClusterScore> = (config.k_min..=config.k_max)
        .into_par_iter()
        .filter_map(|k| score_k(&rows, k, config))
        .collect();
    let best = select_best(&scores).ok_or_else(|| MetricError::Failed {
        reason: "no cluster count could be fitted".to_string(),
    })?;

    let intra_cluster_density =
        ensure_finite(best.intra / (global_ref + EPSILON), "intra_cluster_density")?;
    let silhouette_approx = ensure_finite(best.silhouette, "silhouette_approx")?;
    Ok(DensityMetrics {
        intra_cluster_density: Some(intra_cluster_density),
        silhouette_approx: Some(silhouette_approx),
        density_k: Some(best.k as u32),
    })
}

/// Numeric columns that are neither the target nor a time marker.
fn feature_columns(matrix: &FeatureMatrix) -> Vec<&Column> {
    matrix
        .numeric_columns()
        .filter(|c| {
            let name = c.name.to_lowercase();
            name != "target" && !name.starts_with("time") && !name.ends_with("stamp")
        })
        .collect()
}

/// Row-major values of every row with no missing feature.
fn complete_rows(features: &[&Column], n_rows: usize) -> Vec<Vec<f64>> {
    (0..n_rows)
        .filter_map(|r| {
            features
                .iter()
                .map(|c| c.cells[r].to_number())
                .collect::<Option<Vec<f64>>>()
        })
        .collect()
}

fn score_k(rows: &[Vec<f64>], k: usize, config: &DensityConfig) -> Option<ClusterScore> {
    let fit = match kmeans::fit(rows, k, config.n_init, config.max_iter, config.seed) {
        Ok(fit) => fit,
        Err(e) => {
            debug!(k, reason = %e, "skipping cluster count");
            return None;
        }
    };

    let intra = 2.0
        * rows
            .iter()
            .zip(&fit.labels)
            .map(|(row, &label)| euclidean(row, &fit.centers[label]))
            .sum::<f64>()
        / rows.len() as f64;

    let mut pair_dists = Vec::new();
    for i in 0..fit.centers.len() {
        for j in i + 1..fit.centers.len() {
            pair_dists.push(euclidean(&fit.centers[i], &fit.centers[j]));
        }
    }
    let inter = if pair_dists.is_empty() {
        0.0
    } else {
        pair_dists.iter().sum::<f64>() / pair_dists.len() as f64
    };

    let silhouette = if inter > intra && inter > EPSILON {
        (inter - intra) / (inter + EPSILON)
    } else {
        0.0
    };
    Some(ClusterScore {
        k,
        intra,
        inter,
        silhouette,
    })
}

/// Strictly greatest silhouette; ties keep the smaller k.
fn select_best(scores: &[ClusterScore]) -> Option<ClusterScore> {
    let mut best: Option<ClusterScore> = None;
    for score in scores {
        match best {
            Some(b)
                if score.silhouette > b.silhouette
                    || (score.silhouette == b.silhouette && score.k < b.k) =>
            {
                best = Some(*score)
            }
            None => best = Some(*score),
            _ => {}
        }
    }
    best
}
