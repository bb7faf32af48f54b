//! Observability setup: `tracing` with `EnvFilter`, per-axis spans.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
