//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads the `AXES_LOG` environment variable for per-module log levels,
/// e.g. `AXES_LOG=axes_metrics::retention=debug,axes_checks=info`.
/// Falls back to `info` if `AXES_LOG` is unset or invalid.
///
/// Idempotent: calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("AXES_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

        // try_init: a host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}
