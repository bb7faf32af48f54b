//! Check outcomes and their exit-status mapping.

use std::fmt;

use axes_core::errors::CheckError;
use serde::Serialize;

/// Process exit status of a passing check.
pub const EXIT_PASS: u8 = 0;
/// Process exit status when at least one violation was found.
pub const EXIT_VIOLATION: u8 = 1;
/// Process exit status for missing, unparsable or malformed input.
pub const EXIT_INPUT_ERROR: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingLevel {
    Info,
    Warning,
    Failure,
}

impl fmt::Display for FindingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Failure => "FAIL",
        };
        f.write_str(tag)
    }
}

/// One observation about one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub key: String,
    pub level: FindingLevel,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.key, self.message)
    }
}

/// Everything a check found, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckReport {
    pub findings: Vec<Finding>,
}

impl CheckReport {
    pub fn push(&mut self, key: &str, level: FindingLevel, message: impl Into<String>) {
        self.findings.push(Finding {
            key: key.to_string(),
            level,
            message: message.into(),
        });
    }

    pub fn failures(&self) -> usize {
        self.count(FindingLevel::Failure)
    }

    pub fn warnings(&self) -> usize {
        self.count(FindingLevel::Warning)
    }

    pub fn passed(&self) -> bool {
        self.failures() == 0
    }

    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            EXIT_PASS
        } else {
            EXIT_VIOLATION
        }
    }

    fn count(&self, level: FindingLevel) -> usize {
        self.findings.iter().filter(|f| f.level == level).count()
    }
}

/// Exit status of a check run: the report's own status, or
/// [`EXIT_INPUT_ERROR`] when the check could not run.
pub fn exit_code(outcome: &Result<CheckReport, CheckError>) -> u8 {
    match outcome {
        Ok(report) => report.exit_code(),
        Err(_) => EXIT_INPUT_ERROR,
    }
}
