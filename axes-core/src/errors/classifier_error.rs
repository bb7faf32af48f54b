//! Classifier fit/predict errors.

use super::error_code::{self, AxesErrorCode};

/// Errors raised by a [`Classifier`](crate::traits::Classifier) implementation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("empty training set")]
    EmptyTrainingSet,

    #[error("features/labels length mismatch: {features} rows vs {labels} labels")]
    LengthMismatch { features: usize, labels: usize },

    #[error("feature width mismatch: expected {expected}, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },

    #[error("classifier used before fit")]
    NotFitted,

    #[error("evaluation split is empty")]
    EmptyEvaluationSet,
}

impl AxesErrorCode for ClassifierError {
    fn error_code(&self) -> &'static str {
        error_code::CLASSIFIER_ERROR
    }
}
