use std::fmt;

use serde::{Deserialize, Serialize};

/// An unordered pair of tokens stored in canonical `(min, max)` order.
///
/// The canonical order is enforced on construction and on deserialization, so
/// `WordPair::new("b", "a") == WordPair::new("a", "b")`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct WordPair {
    first: String,
    second: String,
}

impl WordPair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// The lexicographically smaller word.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The lexicographically larger word.
    pub fn second(&self) -> &str {
        &self.second
    }
}

impl From<(String, String)> for WordPair {
    fn from((a, b): (String, String)) -> Self {
        Self::new(a, b)
    }
}

impl From<WordPair> for (String, String) {
    fn from(pair: WordPair) -> Self {
        (pair.first, pair.second)
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
