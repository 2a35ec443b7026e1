use std::collections::BTreeSet;

use proptest::prelude::*;
use storyline_core::{Document, WordPair};

proptest! {
    #[test]
    fn word_pair_ignores_argument_order(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        let pair = WordPair::new(a.clone(), b.clone());
        prop_assert_eq!(&pair, &WordPair::new(b, a));
        prop_assert!(pair.first() <= pair.second());
    }

    #[test]
    fn word_pair_json_is_canonical(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        let json = serde_json::to_string(&(b.clone(), a.clone())).unwrap();
        let parsed: WordPair = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, WordPair::new(a, b));
    }

    #[test]
    fn documents_sort_chronologically(
        posts in prop::collection::vec(("[a-z ]{0,12}", 0i64..10_000_000), 0..40)
    ) {
        let docs: BTreeSet<Document> = posts
            .iter()
            .map(|(content, secs)| Document::from_unix(content.clone(), *secs).unwrap())
            .collect();
        let times: Vec<_> = docs.iter().map(Document::timestamp).collect();
        prop_assert!(times.windows(2).all(|w| w[0] <= w[1]));

        // Equal documents collapse; distinct (timestamp, content) pairs do not.
        let distinct: BTreeSet<_> = posts.iter().collect();
        prop_assert_eq!(docs.len(), distinct.len());
    }

    #[test]
    fn unix_seconds_round_trip_through_json(secs in 0i64..4_000_000_000) {
        let doc = Document::from_unix("post", secs).unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        prop_assert_eq!(json["timestamp"].as_i64(), Some(secs));
    }
}
