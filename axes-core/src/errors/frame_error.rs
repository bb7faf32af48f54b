//! Feature matrix errors. These are programming errors and always propagate.

use super::error_code::{self, AxesErrorCode};

/// Errors raised while building or pairing feature matrices.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameError {
    #[error("column {column} has {actual} rows, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate column name: {column}")]
    DuplicateColumn { column: String },

    #[error("column not found: {column}")]
    MissingColumn { column: String },

    #[error("feature matrix has no columns")]
    Empty,

    #[error("target mismatch: baseline target {expected}, shifted last column {actual}")]
    TargetMismatch { expected: String, actual: String },

    #[error("shifted snapshot lacks numeric feature column {column}")]
    ColumnMismatch { column: String },
}

impl AxesErrorCode for FrameError {
    fn error_code(&self) -> &'static str {
        error_code::FRAME_ERROR
    }
}
