use super::{ConfigError, TextError};

/// Top-level error for every fallible Storyline operation.
#[derive(Debug, thiserror::Error)]
pub enum StorylineError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("timestamp {seconds} is outside the representable range")]
    InvalidTimestamp { seconds: i64 },

    #[error("deadline exceeded after {windows_processed} windows ({elapsed_ms} ms)")]
    DeadlineExceeded {
        windows_processed: usize,
        elapsed_ms: u128,
    },

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("text error: {0}")]
    TextError(#[from] TextError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl StorylineError {
    /// Shorthand for [`StorylineError::InvalidConfiguration`].
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
