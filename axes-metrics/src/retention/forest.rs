//! Random forest of CART trees (Gini impurity, bootstrap rows, √d features).
//!
//! Trees are grown in parallel with rayon. Each tree draws from its own
//! generator seeded up front, so the fitted forest does not depend on
//! thread scheduling.

use axes_core::errors::ClassifierError;
use axes_core::traits::Classifier;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

/// Forest hyperparameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ForestParams {
    pub n_estimators: usize,
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf {
        class: usize,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn predict(&self, row: &[f64]) -> usize {
        let mut at = 0;
        loop {
            match self.nodes[at] {
                Node::Leaf { class } => return class,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => at = if row[feature] <= threshold { left } else { right },
            }
        }
    }
}

/// Majority-vote ensemble of decision trees.
#[derive(Debug, Clone)]
pub struct RandomForest {
    params: ForestParams,
    trees: Vec<Tree>,
    n_features: usize,
    n_classes: usize,
}

impl RandomForest {
    pub fn new(params: ForestParams) -> Self {
        Self {
            params,
            trees: Vec::new(),
            n_features: 0,
            n_classes: 0,
        }
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Classifier for RandomForest {
    fn fit(&mut self, features: &[Vec<f64>], labels: &[usize]) -> Result<(), ClassifierError> {
        let n_features = validate_training_set(features, labels)?;
        let n_classes = labels.iter().max().map_or(0, |m| m + 1);

        let mut seeder = Xoshiro256PlusPlus::seed_from_u64(self.params.seed);
        let seeds: Vec<u64> = (0..self.params.n_estimators.max(1))
            .map(|_| seeder.gen())
            .collect();

        let builder = TreeBuilder {
            features,
            labels,
            n_classes,
            max_features: ((n_features as f64).sqrt().floor() as usize).max(1),
            max_depth: self.params.max_depth,
            min_samples_split: self.params.min_samples_split.max(2),
        };
        self.trees = seeds
            .into_par_iter()
            .map(|seed| builder.grow(&mut Xoshiro256PlusPlus::seed_from_u64(seed)))
            .collect();
        self.n_features = n_features;
        self.n_classes = n_classes;
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<usize>, ClassifierError> {
        if self.trees.is_empty() {
            return Err(ClassifierError::NotFitted);
        }
        check_width(features, self.n_features)?;

        Ok(features
            .iter()
            .map(|row| {
                let mut votes = vec![0usize; self.n_classes];
                for tree in &self.trees {
                    votes[tree.predict(row)] += 1;
                }
                argmax_lowest(&votes)
            })
            .collect())
    }
}

/// Shared training data and growth limits for every tree.
struct TreeBuilder<'a> {
    features: &'a [Vec<f64>],
    labels: &'a [usize],
    n_classes: usize,
    max_features: usize,
    max_depth: Option<usize>,
    min_samples_split: usize,
}

struct PendingNode {
    slot: usize,
    rows: Vec<usize>,
    depth: usize,
}

impl TreeBuilder<'_> {
    fn grow(&self, rng: &mut Xoshiro256PlusPlus) -> Tree {
        let n = self.labels.len();
        let bootstrap: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();

        let mut nodes = vec![Node::Leaf { class: 0 }];
        let mut stack = vec![PendingNode {
            slot: 0,
            rows: bootstrap,
            depth: 0,
        }];
        while let Some(PendingNode { slot, rows, depth }) = stack.pop() {
            let counts = self.class_counts(&rows);
            let depth_reached = self.max_depth.is_some_and(|d| depth >= d);
            let pure = counts.iter().filter(|&&c| c > 0).count() <= 1;

            let split = if depth_reached || pure || rows.len() < self.min_samples_split {
                None
            } else {
                self.best_split(&rows, &counts, rng)
            };
            let Some((feature, threshold)) = split else {
                nodes[slot] = Node::Leaf {
                    class: argmax_lowest(&counts),
                };
                continue;
            };

            let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = rows
                .iter()
                .copied()
                .partition(|&r| self.features[r][feature] <= threshold);
            let left = nodes.len();
            let right = left + 1;
            nodes.push(Node::Leaf { class: 0 });
            nodes.push(Node::Leaf { class: 0 });
            nodes[slot] = Node::Split {
                feature,
                threshold,
                left,
                right,
            };
            stack.push(PendingNode {
                slot: right,
                rows: right_rows,
                depth: depth + 1,
            });
            stack.push(PendingNode {
                slot: left,
                rows: left_rows,
                depth: depth + 1,
            });
        }
        Tree { nodes }
    }

    fn class_counts(&self, rows: &[usize]) -> Vec<usize> {
        let mut counts = vec![0usize; self.n_classes];
        for &r in rows {
            counts[self.labels[r]] += 1;
        }
        counts
    }

    /// Lowest weighted Gini impurity over a random subset of features.
    /// `None` when no candidate threshold reduces impurity.
    fn best_split(
        &self,
        rows: &[usize],
        counts: &[usize],
        rng: &mut Xoshiro256PlusPlus,
    ) -> Option<(usize, f64)> {
        let n_features = self.features[0].len();
        let n = rows.len() as f64;
        let parent = gini(counts, rows.len());
        let mut best: Option<(usize, f64)> = None;
        let mut best_impurity = parent - 1e-12;

        let mut sorted = rows.to_vec();
        for feature in index::sample(rng, n_features, self.max_features.min(n_features)) {
            sorted.sort_by(|&a, &b| self.features[a][feature].total_cmp(&self.features[b][feature]));

            let mut left = vec![0usize; self.n_classes];
            let mut right = counts.to_vec();
            for i in 0..sorted.len() - 1 {
                let label = self.labels[sorted[i]];
                left[label] += 1;
                right[label] -= 1;

                let here = self.features[sorted[i]][feature];
                let next = self.features[sorted[i + 1]][feature];
                if here >= next {
                    continue;
                }
                let n_left = i + 1;
                let n_right = sorted.len() - n_left;
                let impurity = (n_left as f64 * gini(&left, n_left)
                    + n_right as f64 * gini(&right, n_right))
                    / n;
                if impurity < best_impurity {
                    best_impurity = impurity;
                    best = Some((feature, here + (next - here) / 2.0));
                }
            }
        }
        best
    }
}

fn gini(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let t = total as f64;
    1.0 - counts.iter().map(|&c| (c as f64 / t).powi(2)).sum::<f64>()
}

/// Index of the largest count; ties go to the lowest index.
pub(crate) fn argmax_lowest(counts: &[usize]) -> usize {
    let mut best = 0;
    for (i, &c) in counts.iter().enumerate() {
        if c > counts[best] {
            best = i;
        }
    }
    best
}

/// Common input checks for every classifier: non-empty, aligned, rectangular.
/// Returns the feature width.
pub(crate) fn validate_training_set(
    features: &[Vec<f64>],
    labels: &[usize],
) -> Result<usize, ClassifierError> {
    if features.is_empty() {
        return Err(ClassifierError::EmptyTrainingSet);
    }
    if features.len() != labels.len() {
        return Err(ClassifierError::LengthMismatch {
            features: features.len(),
            labels: labels.len(),
        });
    }
    let width = features[0].len();
    check_width(features, width)?;
    Ok(width)
}

pub(crate) fn check_width(features: &[Vec<f64>], width: usize) -> Result<(), ClassifierError> {
    match features.iter().find(|row| row.len() != width) {
        Some(row) => Err(ClassifierError::WidthMismatch {
            expected: width,
            actual: row.len(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(n_estimators: usize) -> ForestParams {
        ForestParams {
            n_estimators,
            max_depth: None,
            min_samples_split: 2,
            seed: 42,
        }
    }

    fn threshold_data() -> (Vec<Vec<f64>>, Vec<usize>) {
        let features: Vec<Vec<f64>> = (0..80).map(|i| vec![i as f64, (i % 7) as f64]).collect();
        let labels = (0..80).map(|i| usize::from(i >= 40)).collect();
        (features, labels)
    }

    #[test]
    fn test_learns_threshold_rule() {
        let (x, y) = threshold_data();
        let mut forest = RandomForest::new(params(25));
        forest.fit(&x, &y).unwrap();
        assert_eq!(forest.n_trees(), 25);
        let pred = forest.predict(&[vec![5.0, 1.0], vec![75.0, 1.0]]).unwrap();
        assert_eq!(pred, vec![0, 1]);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (x, y) = threshold_data();
        let mut a = RandomForest::new(params(10));
        let mut b = RandomForest::new(params(10));
        a.fit(&x, &y).unwrap();
        b.fit(&x, &y).unwrap();
        assert_eq!(a.trees, b.trees);
    }

    #[test]
    fn test_input_errors() {
        let mut forest = RandomForest::new(params(3));
        assert!(matches!(forest.predict(&[vec![1.0]]), Err(ClassifierError::NotFitted)));
        assert!(matches!(forest.fit(&[], &[]), Err(ClassifierError::EmptyTrainingSet)));
        assert!(matches!(
            forest.fit(&[vec![1.0]], &[0, 1]),
            Err(ClassifierError::LengthMismatch { .. })
        ));

        let (x, y) = threshold_data();
        forest.fit(&x, &y).unwrap();
        assert!(matches!(
            forest.predict(&[vec![1.0]]),
            Err(ClassifierError::WidthMismatch { .. })
        ));
    }

    #[test]
    fn test_max_depth_zero_predicts_majority() {
        let x: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64]).collect();
        let y = vec![0, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        let mut forest = RandomForest::new(ForestParams {
            max_depth: Some(0),
            ..params(5)
        });
        forest.fit(&x, &y).unwrap();
        // Bootstrap samples are dominated by class 1.
        assert_eq!(forest.predict(&[vec![0.0]]).unwrap(), vec![1]);
    }

    #[test]
    fn test_argmax_ties_go_low() {
        assert_eq!(argmax_lowest(&[2, 3, 3]), 1);
        assert_eq!(argmax_lowest(&[]), 0);
    }
}
