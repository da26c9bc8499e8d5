//! Structured logging initialization
//!
//! Provides consistent logging initialization across all fiscal-ops
//! components. Log lines go to stderr with a timestamp prefix; stdout is
//! reserved for reporter output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Guard that keeps the tracing subscriber active.
/// Drop this at the end of main to flush logs.
pub struct LogGuard;

/// Initialize structured logging for a component.
///
/// Honors `RUST_LOG` and defaults to INFO. Returns a guard that should be
/// held for the lifetime of the program.
///
/// # Example
/// ```ignore
/// let _guard = init_logging("migrate");
/// info!("Running migration...");
/// ```
pub fn init_logging(_component: &str) -> LogGuard {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let format = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();

    LogGuard
}
