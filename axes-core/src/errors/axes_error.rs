//! Umbrella error for engine entry points.

use super::error_code::AxesErrorCode;
use super::{CheckError, ClassifierError, ConfigError, FrameError, MetricError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AxesError {
    #[error("Frame error: {0}")]
    Frame(#[from] FrameError),

    #[error("Metric error: {0}")]
    Metric(#[from] MetricError),

    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Check error: {0}")]
    Check(#[from] CheckError),
}

impl AxesErrorCode for AxesError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Frame(e) => e.error_code(),
            Self::Metric(e) => e.error_code(),
            Self::Classifier(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Check(e) => e.error_code(),
        }
    }
}

pub type AxesResult<T> = Result<T, AxesError>;
