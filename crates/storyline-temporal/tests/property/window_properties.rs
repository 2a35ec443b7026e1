use chrono::Duration;
use proptest::prelude::*;
use storyline_temporal::window;
use test_fixtures::{base_time, doc};

fn corpus(offsets: &[u32]) -> Vec<storyline_core::Document> {
    offsets
        .iter()
        .enumerate()
        .map(|(i, &secs)| doc(&format!("post {i}"), i64::from(secs)))
        .collect()
}

proptest! {
    #[test]
    fn every_document_lands_in_some_window(
        offsets in prop::collection::vec(0u32..200_000, 1..60),
        size_hours in 1i64..6,
        step_divisor in 1i64..4,
    ) {
        let docs = corpus(&offsets);
        let size = Duration::hours(size_hours);
        let step = Duration::minutes(size_hours * 60 / step_divisor);
        let start = docs.iter().map(|d| d.timestamp()).min().unwrap();
        let windows = window(&docs, start, size, Some(step)).unwrap();
        for d in &docs {
            prop_assert!(
                windows.iter().any(|w| w.documents.contains(d)),
                "document at {} missing", d.timestamp()
            );
        }
        for w in &windows {
            prop_assert_eq!(w.end - w.start, size);
            for d in &w.documents {
                prop_assert!(w.contains(d.timestamp()));
            }
        }
    }

    #[test]
    fn equal_step_partitions_the_corpus(
        offsets in prop::collection::vec(0u32..200_000, 0..60),
        size_hours in 1i64..6,
    ) {
        let docs = corpus(&offsets);
        let size = Duration::hours(size_hours);
        let windows = window(&docs, base_time(), size, None).unwrap();
        let total: usize = windows.iter().map(|w| w.len()).sum();
        prop_assert_eq!(total, docs.len());
        for pair in windows.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
    }
}
