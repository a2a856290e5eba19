//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "GUESSRIGHT_LOG";

static INIT: Once = Once::new();

/// Initialize the global subscriber.
///
/// `GUESSRIGHT_LOG` (e.g. `guessright=debug,warn`) wins over
/// `config.level`; an unparseable configured level falls back to `info`.
/// Output goes to stderr so it never interleaves with the console quiz.
/// Calling this more than once has no further effect.
pub fn init_tracing(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let json_layer = config
            .json
            .then(|| {
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(false)
                    .with_writer(std::io::stderr)
            });
        let text_layer = (!config.json)
            .then(|| fmt::layer().with_target(true).with_writer(std::io::stderr));

        // A subscriber installed elsewhere (e.g. by a test harness) takes precedence.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .with(text_layer)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = LoggingConfig::default();
        init_tracing(&config);
        init_tracing(&LoggingConfig {
            level: "debug".to_string(),
            json: true,
        });
        tracing::info!("still logging after repeated init");
    }
}
