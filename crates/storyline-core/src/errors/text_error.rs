/// Tokenization errors.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("invalid token pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
