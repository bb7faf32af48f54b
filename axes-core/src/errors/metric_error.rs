//! Per-metric computation errors.
//!
//! These never escape a component: the engine converts them to an
//! unavailable (`None`) metric value and logs the variant.

use super::error_code::{self, AxesErrorCode};

/// Why a single metric could not be computed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricError {
    #[error("insufficient data: need {required}, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("degenerate input: {reason}")]
    Degenerate { reason: String },

    #[error("computation failed: {reason}")]
    Failed { reason: String },
}

impl MetricError {
    pub fn insufficient(required: usize, available: usize) -> Self {
        Self::InsufficientData {
            required,
            available,
        }
    }

    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate {
            reason: reason.into(),
        }
    }
}

impl AxesErrorCode for MetricError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientData { .. } => error_code::INSUFFICIENT_DATA,
            Self::Degenerate { .. } => error_code::DEGENERATE_INPUT,
            Self::Failed { .. } => error_code::METRIC_FAILED,
        }
    }
}
