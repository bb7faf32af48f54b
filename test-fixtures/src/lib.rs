//! Test fixtures for the axes workspace: golden JSON files plus seeded
//! generators for series and feature matrices.
//!
//! Every generator is deterministic for a given seed.

use std::path::PathBuf;

use axes_core::frame::{Column, FeatureMatrix, Series};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::de::DeserializeOwned;

/// Root directory of the test-fixtures folder.
pub fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

pub fn rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// Standard normal draw (Box-Muller).
pub fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

pub fn normal_values(n: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = rng(seed);
    (0..n).map(|_| mean + std * standard_normal(&mut rng)).collect()
}

/// Half the values around `-separation / 2`, half around `+separation / 2`.
pub fn bimodal_values(n: usize, separation: f64, seed: u64) -> Vec<f64> {
    let mut rng = rng(seed);
    (0..n)
        .map(|i| {
            let centre = if i % 2 == 0 { -separation / 2.0 } else { separation / 2.0 };
            centre + standard_normal(&mut rng)
        })
        .collect()
}

pub fn constant_series(n: usize, value: f64) -> Series {
    Series::from_values(&vec![value; n])
}

/// Sine wave with the given period plus a little seeded noise.
pub fn seasonal_series(n: usize, period: usize, seed: u64) -> Series {
    let mut rng = rng(seed);
    let values: Vec<f64> = (0..n)
        .map(|i| {
            let phase = 2.0 * std::f64::consts::PI * i as f64 / period as f64;
            phase.sin() + 0.05 * standard_normal(&mut rng)
        })
        .collect();
    Series::from_values(&values)
}

/// Balanced binary classification snapshot: two informative features,
/// one noise feature, and a `target` column in last position.
///
/// Class 1 rows are offset by `separation` on both informative features.
pub fn balanced_frame(rows: usize, separation: f64, seed: u64) -> FeatureMatrix {
    let mut rng = rng(seed);
    let mut f1 = Vec::with_capacity(rows);
    let mut f2 = Vec::with_capacity(rows);
    let mut noise = Vec::with_capacity(rows);
    let mut target = Vec::with_capacity(rows);
    for i in 0..rows {
        let class = (i % 2) as f64;
        f1.push(class * separation + standard_normal(&mut rng));
        f2.push(class * separation + standard_normal(&mut rng));
        noise.push(standard_normal(&mut rng));
        target.push(class);
    }
    FeatureMatrix::new(vec![
        Column::numeric("f1", &f1),
        Column::numeric("f2", &f2),
        Column::numeric("noise", &noise),
        Column::numeric("target", &target),
    ])
    .unwrap_or_else(|e| panic!("balanced_frame produced an invalid matrix: {e}"))
}
