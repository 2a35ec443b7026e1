/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    #[error("failed to read config file {path}: {reason}")]
    ReadFailed { path: String, reason: String },
}
