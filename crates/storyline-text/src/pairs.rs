//! Canonical 2-combinations of a token set.

use std::collections::BTreeSet;

use storyline_core::WordPair;

/// Every unordered pair of distinct tokens, each in `(min, max)` order.
///
/// For `n` tokens this yields exactly `n * (n - 1) / 2` pairs.
pub fn two_combinations(tokens: &BTreeSet<String>) -> BTreeSet<WordPair> {
    let tokens: Vec<&String> = tokens.iter().collect();
    let mut pairs = BTreeSet::new();
    for (i, a) in tokens.iter().enumerate() {
        for b in &tokens[i + 1..] {
            pairs.insert(WordPair::new(a.as_str(), b.as_str()));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn three_tokens_give_three_pairs() {
        let pairs = two_combinations(&set(&["c", "a", "b"]));
        let expected: BTreeSet<WordPair> = [("a", "b"), ("a", "c"), ("b", "c")]
            .into_iter()
            .map(|(a, b)| WordPair::new(a, b))
            .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn fewer_than_two_tokens_give_nothing() {
        assert!(two_combinations(&set(&[])).is_empty());
        assert!(two_combinations(&set(&["solo"])).is_empty());
    }
}
