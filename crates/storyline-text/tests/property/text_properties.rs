use std::collections::BTreeSet;

use proptest::prelude::*;
use storyline_text::{two_combinations, Tokenizer};

proptest! {
    #[test]
    fn pair_count_is_n_choose_two(tokens in prop::collection::btree_set("[a-z]{1,8}", 0..25)) {
        let n = tokens.len();
        let pairs = two_combinations(&tokens);
        prop_assert_eq!(pairs.len(), n * n.saturating_sub(1) / 2);
    }

    #[test]
    fn pairs_are_canonical_and_distinct(tokens in prop::collection::btree_set("[a-z]{1,8}", 0..25)) {
        for pair in two_combinations(&tokens) {
            prop_assert!(pair.first() < pair.second());
            prop_assert!(tokens.contains(pair.first()));
            prop_assert!(tokens.contains(pair.second()));
        }
    }

    #[test]
    fn tokens_are_normalized(text in "[A-Za-z ,.!]{0,120}") {
        let tokenizer = Tokenizer::new(Vec::<String>::new(), None, 0).unwrap();
        for token in tokenizer.tokenize(&text) {
            prop_assert_eq!(token.to_lowercase(), token.clone());
            prop_assert_eq!(token.trim(), token.as_str());
            prop_assert!(!token.is_empty());
        }
    }

    #[test]
    fn stop_words_never_survive(text in "[a-z ]{0,120}", stop in prop::collection::vec("[a-z]{2,5}", 0..6)) {
        let tokenizer = Tokenizer::new(&stop, None, 0).unwrap();
        let tokens: BTreeSet<String> = tokenizer.tokenize(&text);
        for word in &stop {
            prop_assert!(!tokens.contains(word));
        }
    }
}
