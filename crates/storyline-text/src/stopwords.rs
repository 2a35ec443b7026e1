//! Corpus-specific stop words from TF-IDF scores.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::debug;

/// Words whose TF-IDF score falls below `tfidf_threshold` in at least one document.
///
/// Words are whitespace-separated and compared verbatim. The inverse document
/// frequency is `log10(n / (df + 1))`, so a word present in every document
/// scores negative and is always reported.
pub fn unimportant_words<S: AsRef<str>>(contents: &[S], tfidf_threshold: f64) -> BTreeSet<String> {
    let n_docs = contents.len() as f64;
    let mut df: HashMap<&str, usize> = HashMap::new();
    for doc in contents {
        let unique: HashSet<&str> = doc.as_ref().split_whitespace().collect();
        for word in unique {
            *df.entry(word).or_insert(0) += 1;
        }
    }

    let mut unimportant = BTreeSet::new();
    for doc in contents {
        let words: Vec<&str> = doc.as_ref().split_whitespace().collect();
        if words.is_empty() {
            continue;
        }
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for &word in &words {
            *counts.entry(word).or_insert(0) += 1;
        }
        for (word, count) in counts {
            let tf = count as f64 / words.len() as f64;
            let idf = (n_docs / (df[word] as f64 + 1.0)).log10();
            if tf * idf < tfidf_threshold {
                unimportant.insert(word.to_string());
            }
        }
    }

    debug!(
        documents = contents.len(),
        vocabulary = df.len(),
        stop_words = unimportant.len(),
        "stop words generated"
    );
    unimportant
}

/// Parse a stop-word list: one word per line, blank lines ignored.
pub fn parse_stop_words(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
