//! Test fixture loader for Storyline golden corpora and document builders.
//!
//! Provides helpers for loading fixture files in tests across crates.

use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use storyline_core::Document;

/// Golden corpus with two storylines (an earthquake and a rocket launch)
/// across three one-hour windows.
pub const QUAKE_AND_LAUNCH: &str = "golden/quake_and_launch.json";

/// Stop-word list matching the golden corpus.
pub const GOLDEN_STOPWORDS: &str = "golden/stopwords.txt";

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.join("golden").exists() {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Read a fixture file as a string.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn read_fixture(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = read_fixture(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

/// Load a corpus fixture as documents.
pub fn load_corpus(relative_path: &str) -> Vec<Document> {
    load_fixture(relative_path)
}

/// Fixed reference instant: 2019-08-21T00:00:00Z.
pub fn base_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_566_345_600, 0).unwrap()
}

/// A document `offset_secs` after [`base_time`].
pub fn doc(content: &str, offset_secs: i64) -> Document {
    Document::new(content, base_time() + Duration::seconds(offset_secs))
}

/// A document `hours` hours and `minutes` minutes after [`base_time`].
pub fn doc_at(content: &str, hours: i64, minutes: i64) -> Document {
    doc(content, hours * 3600 + minutes * 60)
}
