//! EventDetector: validated config + compiled tokenizer, run once per corpus.

use std::time::{Duration, Instant};

use storyline_consolidation::Storyline;
use storyline_core::config::{DetectionConfig, TextConfig};
use storyline_core::errors::{StorylineError, StorylineResult};
use storyline_core::{Document, StorylineConfig, Timeline, TimelineEntry};
use storyline_temporal::window;
use storyline_text::Tokenizer;
use storyline_tracking::{bucketize_with_stats, TrackingPolicy, TrackingTable};
use tracing::{debug, info, warn};

/// Runs the detection pipeline over a corpus.
///
/// Construction validates the configuration and compiles the token pattern,
/// so a bad setup fails before any window is processed.
#[derive(Debug, Clone)]
pub struct EventDetector {
    config: DetectionConfig,
    policy: TrackingPolicy,
    tokenizer: Tokenizer,
}

impl EventDetector {
    pub fn new<I, S>(
        stop_words: I,
        detection: &DetectionConfig,
        text: &TextConfig,
    ) -> StorylineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        detection.validate()?;
        let tokenizer = Tokenizer::new(
            stop_words,
            text.token_pattern.as_deref(),
            text.min_word_length,
        )?;
        Ok(Self {
            config: detection.clone(),
            policy: TrackingPolicy::from_config(detection),
            tokenizer,
        })
    }

    pub fn from_config<I, S>(stop_words: I, config: &StorylineConfig) -> StorylineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(stop_words, &config.detection, &config.text)
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Detect storylines window by window, starting at the earliest document.
    ///
    /// The tracking table is the only state carried between windows; the
    /// Union-Find forest is rebuilt for every window.
    pub fn detect(&self, documents: &[Document]) -> StorylineResult<Timeline> {
        let Some(first) = documents.iter().map(Document::timestamp).min() else {
            info!("empty corpus, nothing to detect");
            return Ok(Vec::new());
        };

        let windows = window(
            documents,
            first,
            self.config.window_size(),
            Some(self.config.window_step()),
        )?;
        info!(
            documents = documents.len(),
            windows = windows.len(),
            start = %first,
            "event detection started"
        );

        let started = Instant::now();
        let deadline = self.config.deadline_secs.map(Duration::from_secs);
        let mut table = TrackingTable::new();
        let mut timeline = Vec::with_capacity(windows.len());

        for (processed, win) in windows.iter().enumerate() {
            if let Some(limit) = deadline {
                let elapsed = started.elapsed();
                if elapsed >= limit {
                    warn!(
                        windows_processed = processed,
                        elapsed_ms = elapsed.as_millis() as u64,
                        "deadline exceeded"
                    );
                    return Err(StorylineError::DeadlineExceeded {
                        windows_processed: processed,
                        elapsed_ms: elapsed.as_millis(),
                    });
                }
            }

            let (next, stats) = bucketize_with_stats(win, table, &self.tokenizer, &self.policy);
            table = next;

            let groups =
                Storyline::new(&table, self.config.similarity_threshold).consolidated_groups();
            debug!(
                window = processed,
                window_start = %win.start,
                created = stats.created,
                updated = stats.updated,
                expired = stats.expired,
                tracked = table.len(),
                storylines = groups.len(),
                "window processed"
            );

            timeline.push(TimelineEntry {
                window_start: win.start,
                window_end: win.end,
                groups,
            });
        }

        info!(
            windows = timeline.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "event detection finished"
        );
        Ok(timeline)
    }
}

/// Build a detector from `config` and run it over `documents`.
pub fn event_detect<S: AsRef<str>>(
    stop_words: &[S],
    documents: &[Document],
    config: &StorylineConfig,
) -> StorylineResult<Timeline> {
    EventDetector::from_config(stop_words, config)?.detect(documents)
}
