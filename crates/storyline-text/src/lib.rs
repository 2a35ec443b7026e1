//! # storyline-text
//!
//! Turns raw document text into the units the detector tracks:
//! normalized token sets and canonical word pairs. Also generates
//! corpus-specific stop-word lists from TF-IDF scores.

pub mod pairs;
pub mod stopwords;
pub mod tokenizer;

pub use pairs::two_combinations;
pub use stopwords::{parse_stop_words, unimportant_words};
pub use tokenizer::{tokenize, Tokenizer};
