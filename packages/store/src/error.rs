//! Error types for the storage layer and the login flow.

use thiserror::Error;

/// Failure talking to the underlying key/value medium.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The medium does not exist on this platform or was disabled by the user
    /// (e.g. private browsing with storage turned off).
    #[error("storage is not available: {0}")]
    Unavailable(String),

    /// The medium rejected the operation (quota exceeded, security error, ...).
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("failed to serialize value for key `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a login submission was not accepted.
///
/// There is no credential check, so the only rejections are empty fields or a
/// storage failure while persisting the session.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Введите email")]
    MissingEmail,

    #[error("Введите пароль")]
    MissingPassword,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failure loading `lumen.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
