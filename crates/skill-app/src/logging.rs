// File: src/logging.rs
// Purpose: tracing subscriber setup for the CLI

use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber
///
/// `RUST_LOG` wins when set; otherwise `default_level` is used. Calling
/// this twice is harmless: the second install is ignored.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
