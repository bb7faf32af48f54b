use axes_core::constants::EPSILON;
use axes_metrics::population_stability_index;
use axes_metrics::utils::{half_split, quantile_bins, safe_ratio};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn quantile_bins_are_sorted_and_bracket_the_data(
        values in prop::collection::vec(-1e6f64..1e6, 1..300),
        bins in 1usize..20,
    ) {
        let edges = quantile_bins(&values, bins);
        prop_assert!(!edges.is_empty());
        prop_assert!(edges.len() <= bins + 1);
        prop_assert!(edges.windows(2).all(|w| w[0] <= w[1]));

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(close(edges[0], min), "first edge {} vs min {}", edges[0], min);
        prop_assert!(close(edges[edges.len() - 1], max), "last edge vs max {}", max);
    }

    #[test]
    fn safe_ratio_is_always_finite(a in -1e12f64..1e12, b in -1e12f64..1e12) {
        prop_assert!(safe_ratio(a, b).is_finite());
    }

    #[test]
    fn safe_ratio_by_zero_divides_by_epsilon(a in -1e3f64..1e3) {
        prop_assert!(close(safe_ratio(a, 0.0), a / EPSILON));
    }

    #[test]
    fn half_split_preserves_order_and_length(items in prop::collection::vec(any::<i32>(), 0..200)) {
        let (left, right) = half_split(&items);
        prop_assert_eq!(left.len(), items.len() / 2);
        prop_assert_eq!(left.len() + right.len(), items.len());
        prop_assert_eq!([left, right].concat(), items);
    }

    #[test]
    fn psi_is_non_negative(
        expected in prop::collection::vec(-100f64..100.0, 20..200),
        actual in prop::collection::vec(-100f64..100.0, 20..200),
    ) {
        if let Some(psi) = population_stability_index(&expected, &actual, 10) {
            prop_assert!(psi >= -1e-12);
            prop_assert!(psi.is_finite());
        }
    }
}
