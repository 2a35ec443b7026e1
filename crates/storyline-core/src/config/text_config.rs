use serde::{Deserialize, Serialize};

use super::defaults;

/// Tokenizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Custom token regex. `None` uses the built-in pattern.
    pub token_pattern: Option<String>,
    /// Tokens this short or shorter are dropped. 0 disables the filter.
    pub min_word_length: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            token_pattern: None,
            min_word_length: defaults::DEFAULT_MIN_WORD_LENGTH,
        }
    }
}
