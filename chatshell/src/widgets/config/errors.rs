use thiserror::Error;

/// Errors emitted while reading or writing the shell configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Filesystem operation failed.
    #[error("config IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization failed.
    #[error("config JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}
