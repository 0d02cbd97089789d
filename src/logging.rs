//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`, so the progress lines the
//! binary prints on stdout stay untouched. The filter comes from `RUST_LOG`
//! and falls back to [`DEFAULT_FILTER`].

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

static INIT: Once = Once::new();

/// Builds the filter from `RUST_LOG`, falling back to `default`.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initializes the global subscriber. Later calls are ignored.
pub fn init() {
    INIT.call_once(|| {
        // A subscriber installed by an embedding application wins.
        let _ = tracing_subscriber::registry()
            .with(env_filter(DEFAULT_FILTER))
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init();
        init();
        tracing::debug!("logging initialized");
    }
}
