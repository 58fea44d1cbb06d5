//! Logging setup.
//!
//! The library itself only emits `tracing` events. Binaries, benchmarks and
//! tests that want to see them call one of the initializers below.

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with typeflow defaults.
///
/// Sets up tracing-subscriber with:
/// - Environment filter (RUST_LOG)
/// - Compact format suitable for terminal output
///
/// Panics if a global subscriber is already installed; use [`try_init`] when
/// that can happen (for example from tests).
pub fn init() {
    init_with_filter("info");
}

/// Initialize tracing with a custom default filter.
pub fn init_with_filter(default_filter: &str) {
    registry(default_filter).init();
}

/// Like [`init_with_filter`], but returns `false` instead of panicking when a
/// subscriber is already installed.
pub fn try_init(default_filter: &str) -> bool {
    registry(default_filter).try_init().is_ok()
}

fn registry(default_filter: &str) -> impl SubscriberInitExt {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
}
