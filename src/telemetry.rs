//! Tracing subscriber setup shared by the server and the maintenance tools

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the subscriber for the HTTP server (`RUST_LOG`, default `info`)
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Install the subscriber for command-line tools
///
/// Logs go to stderr so reports on stdout stay readable. Defaults to `warn`.
pub fn init_cli() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
