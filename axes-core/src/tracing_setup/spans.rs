//! Span definitions per axis: temporal, drift, shape, density, retention.

/// Create a temporal-axis span.
#[macro_export]
macro_rules! temporal_span {
    ($len:expr) => {
        tracing::debug_span!("axes.temporal", series_len = $len)
    };
}

/// Create a drift-axis span.
#[macro_export]
macro_rules! drift_span {
    ($baseline_len:expr, $current_len:expr) => {
        tracing::debug_span!(
            "axes.drift",
            baseline_len = $baseline_len,
            current_len = $current_len
        )
    };
}

/// Create a shape-axis span.
#[macro_export]
macro_rules! shape_span {
    ($len:expr) => {
        tracing::debug_span!("axes.shape", series_len = $len)
    };
}

/// Create a density-axis span.
#[macro_export]
macro_rules! density_span {
    ($rows:expr, $cols:expr) => {
        tracing::debug_span!("axes.density", rows = $rows, cols = $cols)
    };
}

/// Create a retention-axis span.
#[macro_export]
macro_rules! retention_span {
    ($base_rows:expr, $shift_rows:expr) => {
        tracing::info_span!(
            "axes.retention",
            base_rows = $base_rows,
            shift_rows = $shift_rows
        )
    };
}

