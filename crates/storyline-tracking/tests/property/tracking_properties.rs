use std::collections::BTreeMap;

use chrono::Duration;
use proptest::prelude::*;
use storyline_core::{EventBox, TimeWindow, WordPair};
use storyline_text::Tokenizer;
use storyline_tracking::{bucketize, TrackingPolicy, TrackingTable};
use test_fixtures::{base_time, doc};

const VOCABULARY: [&str; 5] = ["alpha", "beta", "gamma", "delta", "omega"];

/// Windows of one hour each; every document is a subset of the vocabulary.
fn build_windows(shape: &[Vec<Vec<usize>>]) -> Vec<TimeWindow> {
    shape.iter()
        .enumerate()
        .map(|(w, docs)| {
            let start = base_time() + Duration::hours(w as i64);
            let documents = docs
                .iter()
                .enumerate()
                .map(|(d, words)| {
                    let text: Vec<&str> = words.iter().map(|&i| VOCABULARY[i]).collect();
                    doc(&text.join(" "), w as i64 * 3600 + d as i64)
                })
                .collect();
            TimeWindow::new(start, start + Duration::hours(1), documents)
        })
        .collect()
}

fn window_strategy() -> impl Strategy<Value = Vec<Vec<Vec<usize>>>> {
    prop::collection::vec(
        prop::collection::vec(prop::collection::vec(0usize..5, 0..5), 0..5),
        1..6,
    )
}

fn pairs_in(window: &TimeWindow, tokenizer: &Tokenizer) -> BTreeMap<WordPair, usize> {
    let mut counts = BTreeMap::new();
    for document in &window.documents {
        for pair in tokenizer.word_pairs(document.content()) {
            *counts.entry(pair).or_insert(0) += 1;
        }
    }
    counts
}

proptest! {
    #[test]
    fn boxes_only_grow(shape in window_strategy(), threshold in 1usize..3, keepalive in 0i64..3) {
        let tokenizer = Tokenizer::new(Vec::<String>::new(), None, 0).unwrap();
        let policy = TrackingPolicy { significance_threshold: threshold, keepalive: Duration::hours(keepalive) };
        let mut table = TrackingTable::new();
        for window in build_windows(&shape) {
            let before: BTreeMap<WordPair, EventBox> =
                table.iter().map(|(p, b)| (p.clone(), b.clone())).collect();
            table = bucketize(&window, table, &tokenizer, &policy);
            for (pair, after) in &table {
                prop_assert!(!after.is_empty());
                prop_assert!(after.start_time() <= after.end_time());
                if let Some(old) = before.get(pair) {
                    prop_assert!(old.documents().is_subset(after.documents()));
                    prop_assert!(after.end_time() >= old.end_time());
                    prop_assert_eq!(after.start_time(), old.start_time());
                }
            }
        }
    }

    #[test]
    fn absence_matches_expiry_rule(shape in window_strategy(), threshold in 1usize..3, keepalive in 0i64..3) {
        let tokenizer = Tokenizer::new(Vec::<String>::new(), None, 0).unwrap();
        let policy = TrackingPolicy { significance_threshold: threshold, keepalive: Duration::hours(keepalive) };
        let mut table = TrackingTable::new();
        for window in build_windows(&shape) {
            let seen = pairs_in(&window, &tokenizer);
            let before: BTreeMap<WordPair, EventBox> =
                table.iter().map(|(p, b)| (p.clone(), b.clone())).collect();
            table = bucketize(&window, table, &tokenizer, &policy);

            for (pair, old) in &before {
                let updated = seen.contains_key(pair);
                let stale = old.end_time() <= window.start + policy.keepalive;
                prop_assert_eq!(!table.contains(pair), !updated && stale);
            }
            for (pair, count) in &seen {
                if !before.contains_key(pair) {
                    prop_assert_eq!(table.contains(pair), *count >= threshold);
                }
            }
        }
    }
}
