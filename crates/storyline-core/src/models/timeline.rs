use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Document, EventBox, WordPair};

/// One storyline: boxes whose document sets were similar enough to merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedGroup {
    /// Union-Find root the members resolved to.
    pub root: WordPair,
    /// Member word pairs, in tracking-table order.
    pub members: Vec<WordPair>,
    /// The box of each member, parallel to `members`.
    pub boxes: Vec<EventBox>,
}

impl ConsolidatedGroup {
    /// Distinct documents across all member boxes, in chronological order.
    pub fn documents(&self) -> BTreeSet<&Document> {
        self.boxes.iter().flat_map(|b| b.documents().iter()).collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The detector's output for a single window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub window_start: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub window_end: DateTime<Utc>,
    pub groups: Vec<ConsolidatedGroup>,
}

/// Ordered per-window results of a detection run.
pub type Timeline = Vec<TimelineEntry>;
