use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Document, WordPair};

/// A tracked word-pair co-occurrence: the pair, the span of windows it has
/// been seen in, and every document that contained it.
///
/// Invariants: `start_time <= end_time`, `documents` is never empty, and
/// neither `documents` nor `end_time` ever shrink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBox {
    word_pair: WordPair,
    #[serde(with = "chrono::serde::ts_seconds")]
    start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    end_time: DateTime<Utc>,
    documents: BTreeSet<Document>,
}

impl EventBox {
    /// Open a box over `[start_time, end_time]`.
    ///
    /// Callers only create boxes from significant, non-empty document groups.
    pub fn new(
        word_pair: WordPair,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        documents: impl IntoIterator<Item = Document>,
    ) -> Self {
        let documents: BTreeSet<Document> = documents.into_iter().collect();
        debug_assert!(!documents.is_empty(), "box created without documents");
        debug_assert!(start_time <= end_time, "box ends before it starts");
        Self {
            word_pair,
            start_time,
            end_time,
            documents,
        }
    }

    /// Keep tracking: merge in the documents seen this window and stretch the
    /// end of the box to the window end. Already-held documents are not duplicated.
    pub fn update(
        &mut self,
        documents: impl IntoIterator<Item = Document>,
        win_end: DateTime<Utc>,
    ) {
        self.documents.extend(documents);
        self.end_time = self.end_time.max(win_end);
    }

    /// Whether the box ended at or before `t`.
    pub fn is_older_than(&self, t: DateTime<Utc>) -> bool {
        self.end_time <= t
    }

    pub fn word_pair(&self) -> &WordPair {
        &self.word_pair
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    pub fn documents(&self) -> &BTreeSet<Document> {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
