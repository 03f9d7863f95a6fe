//! Runtime configuration for the shift console.
//!
//! Configuration is a small JSON document. Every field is optional; missing
//! fields fall back to their defaults and unknown fields are rejected.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use chrono::TimeDelta;
use serde::Deserialize;
use thiserror::Error;

/// Default tracing filter when neither the environment nor the file sets one.
pub const DEFAULT_LOG_FILTER: &str = "shift_tracker=info";

/// Default operator identity for the console transport.
pub const DEFAULT_OPERATOR: &str = "console";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// Path that was requested.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The configuration document is not valid.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for the shift console.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct BotConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Operator identity attached to console input.
    pub operator: String,
    /// Seconds after which an idle flow is discarded. Flows never expire
    /// when unset.
    pub session_timeout_secs: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            operator: DEFAULT_OPERATOR.to_owned(),
            session_timeout_secs: None,
        }
    }
}

impl BotConfig {
    /// Parses configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be opened and
    /// [`ConfigError::Parse`] when its content is invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |source| ConfigError::Read {
            path: path.to_string(),
            source,
        };
        let parent = match path.parent() {
            Some(dir) if !dir.as_str().is_empty() => dir,
            _ => Utf8Path::new("."),
        };
        let file_name = path.file_name().ok_or_else(|| {
            read_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "path has no file name",
            ))
        })?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let raw = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_json(&raw)
    }

    /// Returns the idle timeout for flows, if configured.
    #[must_use]
    pub fn session_timeout(&self) -> Option<TimeDelta> {
        self.session_timeout_secs
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(TimeDelta::try_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_document_uses_defaults() {
        let config = BotConfig::from_json("{}").expect("empty object should parse");
        assert_eq!(config, BotConfig::default());
        assert_eq!(config.session_timeout(), None);
    }

    #[rstest]
    fn fields_override_defaults() {
        let config = BotConfig::from_json(
            r#"{"log_filter": "debug", "operator": "night-desk", "session_timeout_secs": 600}"#,
        )
        .expect("config should parse");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.operator, "night-desk");
        assert_eq!(config.session_timeout(), TimeDelta::try_seconds(600));
    }

    #[rstest]
    #[case(r#"{"operator": "a", "colour": "blue"}"#)]
    #[case(r#"{"session_timeout_secs": "ten"}"#)]
    #[case("not json")]
    fn invalid_documents_are_rejected(#[case] raw: &str) {
        let result = BotConfig::from_json(raw);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[rstest]
    fn oversized_timeout_is_ignored() {
        let config = BotConfig {
            session_timeout_secs: Some(u64::MAX),
            ..BotConfig::default()
        };
        assert_eq!(config.session_timeout(), None);
    }

    #[rstest]
    fn missing_file_reports_path() {
        let result = BotConfig::load(Utf8Path::new("./definitely-missing-shift-config.json"));
        match result {
            Err(ConfigError::Read { path, .. }) => {
                assert!(path.ends_with("definitely-missing-shift-config.json"));
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[rstest]
    fn loads_file_from_disk() {
        let dir = std::env::temp_dir().join(format!("shift-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
        let file = dir.join("config.json");
        std::fs::write(&file, r#"{"operator": "desk-7"}"#).expect("config should be writable");

        let utf8 = camino::Utf8PathBuf::from_path_buf(file).expect("temp path should be UTF-8");
        let config = BotConfig::load(&utf8).expect("config should load");
        assert_eq!(config.operator, "desk-7");

        std::fs::remove_dir_all(&dir).expect("temp dir should be removable");
    }
}
