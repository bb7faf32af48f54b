use axes_core::frame::{Column, FeatureMatrix};
use axes_metrics::AxesEngine;
use proptest::prelude::*;

/// Finite values spanning tiny, ordinary and near-overflow magnitudes.
fn mixed_magnitude() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e3f64..1e3,
        -1e-300f64..1e-300,
        -1.7e308f64..1.7e308,
        prop::sample::select(vec![f64::MAX, f64::MIN, 0.0, f64::MIN_POSITIVE]),
    ]
}

fn frame(rows: &[(f64, f64)]) -> FeatureMatrix {
    let x: Vec<f64> = rows.iter().map(|r| r.0).collect();
    let y: Vec<f64> = rows.iter().map(|r| r.1).collect();
    let target: Vec<f64> = (0..rows.len()).map(|i| (i % 2) as f64).collect();
    FeatureMatrix::new(vec![
        Column::numeric("x", &x),
        Column::numeric("y", &y),
        Column::numeric("target", &target),
    ])
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn axes_values_are_finite_or_unavailable(
        rows in prop::collection::vec((mixed_magnitude(), mixed_magnitude()), 40..160),
    ) {
        let record = AxesEngine::default().compute_axes(&frame(&rows), "x").unwrap();
        for (key, value) in record.entries() {
            if let Some(v) = value {
                prop_assert!(v.is_finite(), "{} = {}", key, v);
            }
        }
        prop_assert!((0.0..=1.0).contains(&record.psi_trigger_rate));
    }

    #[test]
    fn wide_uniform_values_stay_finite(
        rows in prop::collection::vec((-1.7e308f64..1.7e308, -1.0f64..1.0), 120..200),
    ) {
        let record = AxesEngine::default().compute_axes_parallel(&frame(&rows), "x").unwrap();
        for (key, value) in record.entries() {
            if let Some(v) = value {
                prop_assert!(v.is_finite(), "{} = {}", key, v);
            }
        }
    }
}
