//! Errors from the downstream record checkers (file / shape problems).
//!
//! Value problems are not errors: they are reported as violations.

use super::error_code::{self, AxesErrorCode};

/// Input problems that prevent a check from running at all.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Malformed {what}: {message}")]
    Malformed { what: String, message: String },
}

impl AxesErrorCode for CheckError {
    fn error_code(&self) -> &'static str {
        error_code::CHECK_INPUT_ERROR
    }
}
