//! Model retention record.

use serde::{Deserialize, Serialize};

/// Baseline / zero-shot / retrained macro-F1 and the derived retention ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RetentionMetrics {
    pub macro_f1_base: Option<f64>,
    pub macro_f1_shifted_zero_shot: Option<f64>,
    pub macro_f1_shifted_retrained: Option<f64>,
    pub retention_zero_shot: Option<f64>,
    pub retention_retrained: Option<f64>,
}

impl RetentionMetrics {
    /// Every field unavailable (small samples, single-class targets).
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn is_unavailable(&self) -> bool {
        *self == Self::default()
    }

    /// `(key, value)` pairs in the fixed vocabulary order.
    pub fn entries(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("macro_f1_base", self.macro_f1_base),
            ("macro_f1_shifted_zero_shot", self.macro_f1_shifted_zero_shot),
            ("macro_f1_shifted_retrained", self.macro_f1_shifted_retrained),
            ("retention_zero_shot", self.retention_zero_shot),
            ("retention_retrained", self.retention_retrained),
        ]
    }
}
