//! Subcommand implementations. Each returns what the binary should print so
//! the commands can be driven from tests without capturing stdout.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use tracing::info;

use storyline_core::config::defaults::DEFAULT_LOG_LEVEL;
use storyline_core::models::load_corpus_json;
use storyline_core::{Document, StorylineConfig};
use storyline_engine::EventDetector;
use storyline_text::{parse_stop_words, unimportant_words};

use crate::cli::{DetectArgs, OutputFormat, StopwordsArgs};
use crate::render::render_timeline;
use crate::tracing_setup::init_tracing;

/// Load config, stop words, and corpus, run detection, and render the timeline.
pub fn detect(args: &DetectArgs) -> anyhow::Result<String> {
    let config = match &args.config {
        Some(path) => StorylineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => StorylineConfig::default(),
    };
    init_tracing(&config.observability.log_level);

    let stop_words = match &args.stopwords {
        Some(path) => parse_stop_words(&read(path)?),
        None => Vec::new(),
    };
    let documents = read_corpus(&args.corpus)?;
    info!(
        documents = documents.len(),
        stop_words = stop_words.len(),
        "corpus loaded"
    );

    let started = Instant::now();
    let detector = EventDetector::from_config(stop_words, &config)?;
    let timeline = detector.detect(&documents)?;
    let elapsed = started.elapsed();

    let output = match args.format {
        OutputFormat::Text => {
            let mut out = render_timeline(&timeline);
            out.push_str(&format!("Processed in {:.3} s\n", elapsed.as_secs_f64()));
            out
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&timeline)?;
            out.push('\n');
            out
        }
    };
    Ok(output)
}

/// Write the corpus's TF-IDF stop words to `args.output`, sorted, one per line.
/// Returns how many were written.
pub fn stopwords(args: &StopwordsArgs) -> anyhow::Result<usize> {
    init_tracing(DEFAULT_LOG_LEVEL);

    let documents = read_corpus(&args.corpus)?;
    let contents: Vec<&str> = documents.iter().map(Document::content).collect();
    let words = unimportant_words(&contents, args.threshold);
    info!(
        documents = documents.len(),
        stop_words = words.len(),
        threshold = args.threshold,
        "stop words generated"
    );

    let mut body = String::new();
    for word in &words {
        body.push_str(word);
        body.push('\n');
    }
    fs::write(&args.output, body)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(words.len())
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_corpus(path: &Path) -> anyhow::Result<Vec<Document>> {
    let raw = read(path)?;
    load_corpus_json(&raw).with_context(|| format!("failed to parse corpus {}", path.display()))
}
