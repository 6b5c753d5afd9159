//! Tracing setup for the binary.
//!
//! Bunyan-formatted JSON records on stderr, filtered by `RUST_LOG`
//! (falling back to the given default directive). Stdout stays reserved for
//! the analysis output.

use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

use crate::error::ScoringError;

/// Install the global subscriber. Call once, at startup.
pub fn init_tracing(name: &str, default_filter: &str) -> Result<(), ScoringError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let formatting_layer = BunyanFormattingLayer::new(name.to_string(), std::io::stderr);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    set_global_default(subscriber)
        .map_err(|e| ScoringError::Config(format!("Failed to install tracing subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_is_config_error() {
        // Only this test installs a global subscriber
        assert!(init_tracing("lyricscore-test", "warn").is_ok());

        let err = init_tracing("lyricscore-test", "warn").unwrap_err();
        assert!(matches!(err, ScoringError::Config(_)));
    }
}
