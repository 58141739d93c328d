//! Tracing setup for the browser.
//!
//! Events are formatted by `tracing-subscriber`'s fmt layer and handed to
//! `tracing-web`, which writes each one to the console method matching its
//! level (`console.warn` for `WARN`, `console.error` for `ERROR`, ...).
//! Timestamps are disabled because `SystemTime` is not available on
//! `wasm32-unknown-unknown`.

use crate::config::LoggingConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::MakeWebConsoleWriter;

/// Fallback directive when the configured one does not parse.
const FALLBACK_DIRECTIVE: &str = "info";

/// Builds the event filter from configuration.
pub fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// Installs the global subscriber. Calling this twice is harmless.
pub fn init(config: &LoggingConfig) {
    let result = tracing_subscriber::registry()
        .with(filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_ansi(false)
                .with_writer(MakeWebConsoleWriter::new()),
        )
        .try_init();

    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}
