//! Population Stability Index over quantile bins of a reference distribution.

use axes_core::constants::PSI_PROPORTION_FLOOR;

use crate::utils::quantile_bins;

/// Bin layout frozen from a reference sample, with the reference
/// proportions already floored.
#[derive(Debug, Clone)]
pub struct PsiBins {
    /// Interior edges only; the outer edges are implicitly -inf and +inf.
    interior: Vec<f64>,
    expected: Vec<f64>,
}

impl PsiBins {
    /// Quantile bins of `expected`. `None` when the deduplicated edges
    /// describe fewer than `min_bins` bins.
    pub fn from_quantiles(expected: &[f64], bin_count: usize, min_bins: usize) -> Option<Self> {
        let edges = quantile_bins(expected, bin_count);
        if edges.len() < 2 || edges.len() - 1 < min_bins {
            return None;
        }
        Some(Self::with_edges(&edges, expected))
    }

    /// Equal-width bins spanning `reference`, used when the expected side is constant.
    fn equal_width(reference: &[f64], bin_count: usize, expected: &[f64]) -> Option<Self> {
        let (lo, hi) = reference
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lo >= hi || bin_count == 0 {
            return None;
        }
        // Interpolate instead of stepping by `hi - lo`, which can overflow.
        let edges: Vec<f64> = (0..=bin_count)
            .map(|i| {
                let t = i as f64 / bin_count as f64;
                lo * (1.0 - t) + hi * t
            })
            .collect();
        Some(Self::with_edges(&edges, expected))
    }

    fn with_edges(edges: &[f64], expected: &[f64]) -> Self {
        let interior = edges[1..edges.len() - 1].to_vec();
        let expected = proportions(&interior, expected);
        Self { interior, expected }
    }

    pub fn bin_count(&self) -> usize {
        self.interior.len() + 1
    }

    /// Per-bin contribution `(a - e) * ln(a / e)`.
    pub fn contributions(&self, actual: &[f64]) -> Vec<f64> {
        let actual = proportions(&self.interior, actual);
        actual
            .iter()
            .zip(&self.expected)
            .map(|(&a, &e)| (a - e) * (a / e).ln())
            .collect()
    }

    pub fn psi(&self, actual: &[f64]) -> f64 {
        self.contributions(actual).iter().sum()
    }
}

/// Occupancy proportions with half-open bins `[lo, hi)`; the last bin
/// is closed, which the infinite upper edge makes implicit.
fn proportions(interior: &[f64], values: &[f64]) -> Vec<f64> {
    let mut counts = vec![0usize; interior.len() + 1];
    for &v in values {
        counts[interior.partition_point(|&edge| edge <= v)] += 1;
    }
    let n = values.len().max(1) as f64;
    counts
        .into_iter()
        .map(|c| (c as f64 / n).max(PSI_PROPORTION_FLOOR))
        .collect()
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// PSI of `actual` against quantile bins of `expected`.
///
/// Non-finite inputs are dropped first. Returns `None` when either side is
/// empty, when both sides are constant at different values (the index is
/// infinite), or when the bin edges collapse.
pub fn population_stability_index(expected: &[f64], actual: &[f64], bins: usize) -> Option<f64> {
    let expected: Vec<f64> = expected.iter().copied().filter(|v| v.is_finite()).collect();
    let actual: Vec<f64> = actual.iter().copied().filter(|v| v.is_finite()).collect();
    if expected.is_empty() || actual.is_empty() {
        return None;
    }

    let expected_constant = is_constant(&expected);
    if expected_constant && is_constant(&actual) {
        return (expected[0] == actual[0]).then_some(0.0);
    }

    let layout = if expected_constant {
        PsiBins::equal_width(&actual, bins, &expected)?
    } else {
        PsiBins::from_quantiles(&expected, bins, 1)?
    };
    let psi = layout.psi(&actual);
    psi.is_finite().then_some(psi)
}
