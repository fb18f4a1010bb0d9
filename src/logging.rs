// SPDX-License-Identifier: MIT
//
// Diagnostics go to stderr through `tracing`; stdout carries only the
// JSON result line.
//
// Filter precedence: RUST_LOG, then -v / -vv, then `log.level` from the
// configuration file.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("invalid log level {level:?}: {source}")]
    InvalidLevel {
        level: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to set global subscriber: {0}")]
    SetSubscriber(String),
}

/// The filter directive to use when `RUST_LOG` is unset.
#[must_use]
pub fn directive(config: &LogConfig, verbose: u8) -> &str {
    match verbose {
        0 => &config.level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global stderr subscriber.
///
/// # Errors
///
/// Fails on an unparseable level directive or when a subscriber is
/// already installed.
pub fn init(config: &LogConfig, verbose: u8) -> Result<(), LogError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = directive(config, verbose);
            EnvFilter::try_new(level).map_err(|source| LogError::InvalidLevel {
                level: level.to_owned(),
                source,
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .try_init()
        .map_err(|e| LogError::SetSubscriber(e.to_string()))
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_config_level() {
        let config = LogConfig {
            level: "error".to_owned(),
        };
        assert_eq!(directive(&config, 0), "error");
        assert_eq!(directive(&config, 1), "debug");
        assert_eq!(directive(&config, 2), "trace");
        assert_eq!(directive(&config, 9), "trace");
    }

    #[test]
    fn default_level_is_warn() {
        assert_eq!(directive(&LogConfig::default(), 0), "warn");
    }
}
