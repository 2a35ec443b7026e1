//! Regex tokenizer with stop-word and length filtering.

use std::collections::{BTreeSet, HashSet};

use regex::Regex;
use storyline_core::constants::DEFAULT_TOKEN_PATTERN;
use storyline_core::errors::{StorylineResult, TextError};
use storyline_core::WordPair;
use tracing::debug;

use crate::pairs::two_combinations;

/// A compiled tokenizer. Build it once per run and share it across windows.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    stop_words: HashSet<String>,
    min_word_len: usize,
}

impl Tokenizer {
    /// Compile `pattern` (or the default pattern) and normalize the stop words.
    ///
    /// Fails with [`TextError::InvalidPattern`] if the pattern does not compile.
    pub fn new<I, S>(
        stop_words: I,
        pattern: Option<&str>,
        min_word_len: usize,
    ) -> StorylineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let source = pattern.unwrap_or(DEFAULT_TOKEN_PATTERN);
        let pattern = Regex::new(source).map_err(|e| TextError::InvalidPattern {
            pattern: source.to_string(),
            reason: e.to_string(),
        })?;
        let stop_words: HashSet<String> = stop_words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        debug!(
            pattern = source,
            stop_words = stop_words.len(),
            min_word_len,
            "tokenizer compiled"
        );
        Ok(Self {
            pattern,
            stop_words,
            min_word_len,
        })
    }

    /// Extract, normalize and filter the tokens of `text`. Duplicates collapse.
    pub fn tokenize(&self, text: &str) -> BTreeSet<String> {
        self.pattern
            .find_iter(text)
            .map(|m| normalize(m.as_str()))
            .filter(|token| !token.is_empty())
            .filter(|token| !self.stop_words.contains(token))
            .filter(|token| self.min_word_len == 0 || token.chars().count() > self.min_word_len)
            .collect()
    }

    /// Canonical word pairs of the tokens of `text`.
    pub fn word_pairs(&self, text: &str) -> BTreeSet<WordPair> {
        two_combinations(&self.tokenize(text))
    }
}

/// One-off tokenization. Compiles the pattern on every call; prefer
/// [`Tokenizer`] when processing more than one text.
pub fn tokenize<S: AsRef<str>>(
    text: &str,
    stop_words: &[S],
    pattern: Option<&str>,
    min_word_len: usize,
) -> StorylineResult<BTreeSet<String>> {
    Ok(Tokenizer::new(stop_words, pattern, min_word_len)?.tokenize(text))
}

fn normalize(token: &str) -> String {
    token.to_lowercase().trim().to_string()
}
