// SPDX-License-Identifier: MIT
//
// Optional TOML configuration.
//
//   [output]
//   uppercase = false   # #RRGGBB instead of #rrggbb
//
//   [log]
//   level = "warn"      # any tracing EnvFilter directive
//
// Every key has a default, so an absent file and an empty file behave the
// same. Unknown keys are rejected to surface typos.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use huekit_color::HexCase;

/// Everything huekit reads from its configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// How colors are written to stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Emit upper-case hex digits.
    pub uppercase: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn hex_case(&self) -> HexCase {
        if self.uppercase {
            HexCase::Upper
        } else {
            HexCase::Lower
        }
    }
}

/// Diagnostics on stderr.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Load the configuration from `path`, or return defaults when no path
    /// was given.
    ///
    /// # Errors
    ///
    /// Fails when an explicit path cannot be read or does not parse.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn no_path_gives_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output.hex_case(), HexCase::Lower);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn empty_file_gives_defaults() {
        let file = write_config("");
        assert_eq!(Config::load(Some(file.path())).unwrap(), Config::default());
    }

    #[test]
    fn full_file() {
        let file = write_config("[output]\nuppercase = true\n\n[log]\nlevel = \"debug\"\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.output.hex_case(), HexCase::Upper);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let file = write_config("[output]\nuppercase = true\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.output.uppercase);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let file = write_config("[output]\nlowercase = true\n");
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
