use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{StorylineError, StorylineResult};

/// One timestamped piece of text from the corpus.
///
/// Documents are compared, ordered and hashed by value: timestamp first, then
/// content. Two copies of the same post are the same document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Document {
    /// Unix seconds on the wire.
    #[serde(with = "chrono::serde::ts_seconds")]
    timestamp: DateTime<Utc>,
    content: String,
}

impl Document {
    pub fn new(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            content: content.into(),
        }
    }

    /// Build a document from unix seconds.
    pub fn from_unix(content: impl Into<String>, seconds: i64) -> StorylineResult<Self> {
        let timestamp = DateTime::from_timestamp(seconds, 0)
            .ok_or(StorylineError::InvalidTimestamp { seconds })?;
        Ok(Self::new(content, timestamp))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Parse a JSON array of `{"content": ..., "timestamp": <unix seconds>}`.
pub fn load_corpus_json(input: &str) -> StorylineResult<Vec<Document>> {
    Ok(serde_json::from_str(input)?)
}
