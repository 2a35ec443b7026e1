use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use storyline_core::config::defaults::DEFAULT_STOPWORD_TFIDF_THRESHOLD;

#[derive(Parser, Debug)]
#[command(name = "storyline")]
#[command(version, about = "Detect emerging storylines in a time-ordered text corpus")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run event detection and print the timeline
    Detect(DetectArgs),
    /// Generate a stop-word list from TF-IDF scores
    Stopwords(StopwordsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DetectArgs {
    /// Configuration file (.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stop-word file, one word per line
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Input corpus (.json): [{"content": ..., "timestamp": <unix seconds>}]
    #[arg(long)]
    pub corpus: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct StopwordsArgs {
    /// Input corpus (.json)
    pub corpus: PathBuf,

    /// Where to write the stop words
    pub output: PathBuf,

    /// Words scoring below this TF-IDF value in some document are stop words
    #[arg(default_value_t = DEFAULT_STOPWORD_TFIDF_THRESHOLD)]
    pub threshold: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
