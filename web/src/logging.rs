//! Tracing subscriber setup for the two deployment postures.

use tracing_subscriber::EnvFilter;

/// Installs a human-readable subscriber for local development. Honors
/// `RUST_LOG`, defaulting to `debug`. Panics if a subscriber is already
/// installed.
pub fn init_development() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(true)
        .init();
}

/// Installs a compact subscriber for production: no ANSI colors, `info`
/// default filter, `RUST_LOG` honored. Panics if a subscriber is already
/// installed.
pub fn init_production() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .compact()
        .init();
}
