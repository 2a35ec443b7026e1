use std::collections::BTreeSet;

use proptest::prelude::*;
use storyline_consolidation::{consolidate, similarity, Storyline};
use storyline_core::{EventBox, WordPair};
use storyline_tracking::TrackingTable;
use test_fixtures::{base_time, doc};

/// Boxes over a shared pool of ten documents; each box holds a non-empty subset.
fn table_strategy() -> impl Strategy<Value = Vec<BTreeSet<u8>>> {
    prop::collection::vec(prop::collection::btree_set(0u8..10, 1..6), 0..12)
}

fn build_table(subsets: &[BTreeSet<u8>]) -> TrackingTable {
    subsets
        .iter()
        .enumerate()
        .map(|(i, docs)| {
            EventBox::new(
                WordPair::new(format!("w{i:02}"), "zz"),
                base_time(),
                base_time(),
                docs.iter().map(|&d| doc(&format!("post {d}"), i64::from(d))),
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn similarity_is_symmetric_and_bounded(subsets in table_strategy()) {
        let table = build_table(&subsets);
        let boxes: Vec<&EventBox> = table.boxes().collect();
        for a in &boxes {
            for b in &boxes {
                let ab = similarity(a, b);
                prop_assert_eq!(ab, similarity(b, a));
                prop_assert!((0.0..=0.5).contains(&ab));
            }
        }
    }

    #[test]
    fn roots_are_reached_within_box_count_steps(subsets in table_strategy(), threshold in 0.0f64..0.5) {
        let table = build_table(&subsets);
        let hierarchy = consolidate(&table, threshold);
        for pair in table.word_pairs() {
            let depth = hierarchy.depth_of(pair).unwrap();
            prop_assert!(depth < table.len().max(1));
            let root = hierarchy.root_of(pair).unwrap();
            prop_assert_eq!(hierarchy.parent_of(root), Some(root));
        }
    }

    #[test]
    fn groups_partition_the_table(subsets in table_strategy(), threshold in 0.0f64..0.5) {
        let table = build_table(&subsets);
        let groups = Storyline::new(&table, threshold).consolidated_groups();
        let mut seen = BTreeSet::new();
        for group in &groups {
            prop_assert!(group.members.contains(&group.root));
            prop_assert_eq!(group.members.len(), group.boxes.len());
            for member in &group.members {
                prop_assert!(seen.insert(member.clone()), "{} listed twice", member);
            }
        }
        prop_assert_eq!(seen.len(), table.len());
    }

    #[test]
    fn consolidation_is_deterministic(subsets in table_strategy(), threshold in 0.0f64..0.5) {
        let table = build_table(&subsets);
        let first = Storyline::new(&table, threshold).consolidated_groups();
        let second = Storyline::new(&table, threshold).consolidated_groups();
        prop_assert_eq!(first, second);
    }
}
