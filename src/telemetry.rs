//! Tracing subscriber setup for the binary.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const TRACING_ENV: &str = "USER_API_TRACING";

const DEFAULT_FILTER: &str = "user_api=info";

/// Build the filter from `USER_API_TRACING`, or `user_api=info` when it is
/// unset or unparsable.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(TRACING_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Calling this twice is a no-op.
pub fn setup_tracing() {
    let format_layer = tracing_subscriber::fmt::layer().with_target(false);
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(format_layer)
        .try_init();
}
