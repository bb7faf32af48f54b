//! Configuration system for the axes engine.
//! TOML-based, 3-layer resolution: env > project file > compiled defaults.

pub mod axes_config;
pub mod defaults;
pub mod density_config;
pub mod drift_config;
pub mod retention_config;
pub mod shape_config;
pub mod temporal_config;

pub use axes_config::AxesConfig;
pub use density_config::DensityConfig;
pub use drift_config::{DriftConfig, DriftStrategy};
pub use retention_config::RetentionConfig;
pub use shape_config::ShapeConfig;
pub use temporal_config::TemporalConfig;
