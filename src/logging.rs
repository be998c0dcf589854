//! Tracing setup
//!
//! stdout carries the protocol stream, so every log line goes to stderr.

use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` wins, otherwise the given level or directive
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global tracing subscriber writing to stderr
pub fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
