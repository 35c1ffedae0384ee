//! # Application configuration: `lumen.toml`
//!
//! Desktop builds read this file from the platform data directory
//! (filename: [`AppConfig::filename`]); web builds use the defaults.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! session_key = "user"            # key holding the serialized session
//! preferences_key = "preferences" # key holding profile toggles
//!
//! [session]
//! follow_external_changes = false # guarded views react to later logouts
//!
//! [logging]
//! level = "warn"                  # error | warn | info | debug | trace
//! ```
//!
//! Every section and field is optional, so a missing or empty file is the
//! default configuration.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_session_key")]
    pub session_key: String,
    #[serde(default = "default_preferences_key")]
    pub preferences_key: String,
}

fn default_session_key() -> String {
    "user".to_string()
}

fn default_preferences_key() -> String {
    "preferences".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_key: default_session_key(),
            preferences_key: default_preferences_key(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// When set, guarded views stay subscribed after their mount check and
    /// redirect to login once the session disappears.
    #[serde(default)]
    pub follow_external_changes: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "lumen.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read the config at `path`. A missing file is the default configuration.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Like [`load_from`](Self::load_from), but an unreadable or invalid file
    /// falls back to the default. The error is handed back for the caller to
    /// log once logging is up.
    pub fn load_or_default(path: &Path) -> (Self, Option<ConfigError>) {
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage.session_key, "user");
        assert_eq!(config.storage.preferences_key, "preferences");
        assert!(!config.session.follow_external_changes);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [storage]
            session_key = "lumen.session"

            [session]
            follow_external_changes = true
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.session_key, "lumen.session");
        assert_eq!(config.storage.preferences_key, "preferences");
        assert!(config.session.follow_external_changes);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_written_config_parses_back() {
        let mut config = AppConfig::default();
        config.logging.level = "debug".to_string();

        let text = config.to_toml().unwrap();
        assert!(text.contains("[logging]"));
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(AppConfig::filename());

        // Missing file
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());

        std::fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap().logging.level, "info");

        std::fs::write(&path, "[logging\n").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_or_default_keeps_the_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(AppConfig::filename());

        let (config, error) = AppConfig::load_or_default(&path);
        assert_eq!(config, AppConfig::default());
        assert!(error.is_none());

        std::fs::write(&path, "[session]\nfollow_external_changes = true\n").unwrap();
        let (config, error) = AppConfig::load_or_default(&path);
        assert!(config.session.follow_external_changes);
        assert!(error.is_none());

        std::fs::write(&path, "[session\n").unwrap();
        let (config, error) = AppConfig::load_or_default(&path);
        assert_eq!(config, AppConfig::default());
        assert!(matches!(error, Some(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(AppConfig::from_toml("[session]\nfollow_external_changes = \"yes\"").is_err());
    }
}
