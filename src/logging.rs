//! Tracing subscriber setup for the binary.
//!
//! `RUST_LOG` wins when set; otherwise the level comes from `[logging] level`
//! in the config, falling back to `warn`. Output goes to stderr so stdout
//! carries only command results.

use tracing_subscriber::EnvFilter;

use crate::ports::config_port::ConfigPort;

pub const DEFAULT_LEVEL: &str = "warn";

/// Level directive from `[logging] level`, if the config has one.
pub fn configured_level(config: Option<&dyn ConfigPort>) -> String {
    config
        .and_then(|c| c.get_string("logging", "level"))
        .map(|level| level.trim().to_ascii_lowercase())
        .filter(|level| !level.is_empty())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
