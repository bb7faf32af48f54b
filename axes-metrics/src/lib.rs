//! # axes-metrics
//!
//! The axes metrics engine. Five independent, pure components
//! (temporal, drift, shape, density, retention) over a shared numeric
//! utility layer, composed by [`AxesEngine`].

pub mod density;
pub mod drift;
pub mod engine;
pub mod retention;
pub mod shape;
pub mod temporal;
pub mod utils;

pub use density::compute_density_metrics;
pub use drift::{compute_drift_between, compute_drift_metrics, population_stability_index};
pub use engine::AxesEngine;
pub use retention::{
    compute_retention_metrics, compute_retention_metrics_with, compute_shift_intensity,
};
pub use shape::compute_shape_metrics;
pub use temporal::compute_temporal_metrics;
