//! Stable error codes for the engine boundary.

/// Every error enum implements this to expose a structured code string
/// that callers (and the `axes-check` binary) can match on.
pub trait AxesErrorCode {
    /// Returns the error code string (e.g., "FRAME_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
pub const DEGENERATE_INPUT: &str = "DEGENERATE_INPUT";
pub const METRIC_FAILED: &str = "METRIC_FAILED";
pub const CLASSIFIER_ERROR: &str = "CLASSIFIER_ERROR";
pub const FRAME_ERROR: &str = "FRAME_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CHECK_INPUT_ERROR: &str = "CHECK_INPUT_ERROR";
