mod config_error;
mod storyline_error;
mod text_error;

pub use config_error::ConfigError;
pub use storyline_error::StorylineError;
pub use text_error::TextError;

/// Convenience alias used across the workspace.
pub type StorylineResult<T> = Result<T, StorylineError>;
