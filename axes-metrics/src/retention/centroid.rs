//! Nearest-centroid classifier: a deterministic, dependency-free stand-in
//! for the random forest.

use axes_core::errors::ClassifierError;
use axes_core::traits::Classifier;

use super::forest::{check_width, validate_training_set};
use crate::density::scaler::squared_euclidean;

#[derive(Debug, Clone, Default)]
pub struct NearestCentroid {
    /// One centre per class index; `None` for classes absent from training.
    centroids: Vec<Option<Vec<f64>>>,
    n_features: usize,
}

impl NearestCentroid {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Classifier for NearestCentroid {
    fn fit(&mut self, features: &[Vec<f64>], labels: &[usize]) -> Result<(), ClassifierError> {
        let width = validate_training_set(features, labels)?;
        let n_classes = labels.iter().max().map_or(0, |m| m + 1);

        let mut sums = vec![vec![0.0; width]; n_classes];
        let mut counts = vec![0usize; n_classes];
        for (row, &label) in features.iter().zip(labels) {
            counts[label] += 1;
            for (s, v) in sums[label].iter_mut().zip(row) {
                *s += v;
            }
        }

        self.centroids = sums
            .into_iter()
            .zip(counts)
            .map(|(sum, count)| {
                (count > 0).then(|| sum.into_iter().map(|s| s / count as f64).collect())
            })
            .collect();
        self.n_features = width;
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<usize>, ClassifierError> {
        if self.centroids.is_empty() {
            return Err(ClassifierError::NotFitted);
        }
        check_width(features, self.n_features)?;

        Ok(features
            .iter()
            .map(|row| {
                let mut best = 0;
                let mut best_dist = f64::INFINITY;
                for (class, centre) in self.centroids.iter().enumerate() {
                    let Some(centre) = centre else { continue };
                    let d = squared_euclidean(row, centre);
                    if d < best_dist {
                        best_dist = d;
                        best = class;
                    }
                }
                best
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assigns_nearest_class() {
        let x = vec![vec![0.0], vec![1.0], vec![10.0], vec![11.0]];
        let y = vec![0, 0, 2, 2];
        let mut clf = NearestCentroid::new();
        clf.fit(&x, &y).unwrap();
        assert_eq!(clf.predict(&[vec![2.0], vec![9.0]]).unwrap(), vec![0, 2]);
    }

    #[test]
    fn test_unfitted() {
        assert!(matches!(
            NearestCentroid::new().predict(&[vec![0.0]]),
            Err(ClassifierError::NotFitted)
        ));
    }
}
