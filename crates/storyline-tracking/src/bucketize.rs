//! Per-window box maintenance.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use storyline_core::config::DetectionConfig;
use storyline_core::{Document, EventBox, TimeWindow, WordPair};
use storyline_text::Tokenizer;
use tracing::debug;

use crate::table::TrackingTable;

/// Thresholds that drive box creation and expiry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingPolicy {
    /// Minimum documents in one window for an untracked pair to open a box.
    pub significance_threshold: usize,
    /// Added to the window start to form the expiry cutoff.
    pub keepalive: Duration,
}

impl TrackingPolicy {
    pub fn from_config(config: &DetectionConfig) -> Self {
        Self {
            significance_threshold: config.significance_threshold,
            keepalive: config.keepalive(),
        }
    }
}

/// What one `bucketize` call did to the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketizeStats {
    /// Distinct word pairs seen in the window.
    pub candidates: usize,
    pub created: usize,
    pub updated: usize,
    pub expired: usize,
}

/// Advance the tracking table by one window.
///
/// 1. Group the window's documents by every word pair they contain.
/// 2. Update boxes that are already tracked; open a box for an untracked
///    pair whose group meets the significance threshold.
/// 3. Expire boxes that were neither opened nor updated in this window and
///    whose `end_time <= window.start + keepalive`.
pub fn bucketize(
    window: &TimeWindow,
    table: TrackingTable,
    tokenizer: &Tokenizer,
    policy: &TrackingPolicy,
) -> TrackingTable {
    bucketize_with_stats(window, table, tokenizer, policy).0
}

/// [`bucketize`], also reporting how many boxes were created, updated and expired.
pub fn bucketize_with_stats(
    window: &TimeWindow,
    mut table: TrackingTable,
    tokenizer: &Tokenizer,
    policy: &TrackingPolicy,
) -> (TrackingTable, BucketizeStats) {
    let groups = group_by_pair(&window.documents, tokenizer);
    let mut stats = BucketizeStats {
        candidates: groups.len(),
        ..Default::default()
    };

    let mut refreshed: HashSet<WordPair> = HashSet::new();
    for (pair, documents) in groups {
        if let Some(event_box) = table.get_mut(&pair) {
            event_box.update(documents, window.end);
            stats.updated += 1;
            refreshed.insert(pair);
        } else if documents.len() >= policy.significance_threshold {
            table.insert(EventBox::new(pair.clone(), window.start, window.end, documents));
            stats.created += 1;
            refreshed.insert(pair);
        }
    }

    // A cutoff past the end of the calendar expires every unrefreshed box.
    let cutoff = window
        .start
        .checked_add_signed(policy.keepalive)
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    let before = table.len();
    table.retain(|pair, event_box| refreshed.contains(pair) || !event_box.is_older_than(cutoff));
    stats.expired = before - table.len();

    debug!(
        window_start = %window.start,
        documents = window.documents.len(),
        candidates = stats.candidates,
        created = stats.created,
        updated = stats.updated,
        expired = stats.expired,
        tracked = table.len(),
        "window bucketized"
    );
    (table, stats)
}

/// Tokenize every document in parallel, then reduce in document order so the
/// grouping does not depend on thread scheduling.
fn group_by_pair(
    documents: &[Document],
    tokenizer: &Tokenizer,
) -> BTreeMap<WordPair, Vec<Document>> {
    let pairs_per_doc: Vec<BTreeSet<WordPair>> = documents
        .par_iter()
        .map(|doc| tokenizer.word_pairs(doc.content()))
        .collect();

    let mut groups: BTreeMap<WordPair, Vec<Document>> = BTreeMap::new();
    for (doc, pairs) in documents.iter().zip(pairs_per_doc) {
        for pair in pairs {
            groups.entry(pair).or_default().push(doc.clone());
        }
    }
    groups
}
