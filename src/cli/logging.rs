//! Diagnostic output
//!
//! Both tools report through `tracing` to standard error. `RUST_LOG` wins over
//! the configured level. Colour is used only when standard error is a terminal.

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor the config gives a valid one
pub const DEFAULT_LEVEL: &str = "warn";

/// Build the filter for `configured_level`
pub fn env_filter(configured_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(configured_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    })
}

/// Install the stderr subscriber
///
/// A second call is a no-op.
pub fn init(configured_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(configured_level))
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .without_time()
        .with_target(false)
        .try_init();
}
