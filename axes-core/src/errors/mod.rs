//! Error handling for the axes engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod axes_error;
pub mod check_error;
pub mod classifier_error;
pub mod config_error;
pub mod error_code;
pub mod frame_error;
pub mod metric_error;

pub use axes_error::{AxesError, AxesResult};
pub use check_error::CheckError;
pub use classifier_error::ClassifierError;
pub use config_error::ConfigError;
pub use error_code::AxesErrorCode;
pub use frame_error::FrameError;
pub use metric_error::MetricError;
