//! # axes-core
//!
//! Foundation crate for the axes metrics engine.
//! Defines the tabular data model, metric records, the classifier trait,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod frame;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AxesConfig;
pub use errors::{AxesError, AxesResult};
pub use frame::{Cell, Column, FeatureMatrix, Series};
pub use models::{
    AxesRecord, DensityMetrics, DriftMetrics, FeatureShift, FullReport, ReportMetadata,
    RetentionMetrics, ShapeMetrics, TemporalMetrics,
};
pub use traits::Classifier;
