//! Windower: sorted documents → half-open windows `[start, start + size)`.
//!
//! With `step < size` windows overlap and a document can land in several
//! consecutive windows. After closing a window the scan resumes from the
//! earliest document at or past the next window start, so overlapping
//! windows stay amortized linear instead of rescanning from the beginning.

use chrono::{DateTime, Duration, Utc};
use storyline_core::errors::{StorylineError, StorylineResult};
use storyline_core::{Document, TimeWindow};
use tracing::debug;

/// Slice `documents` into windows starting at `start_time`.
///
/// `step_size` defaults to `window_size`. Windows that fall entirely inside
/// a gap in the corpus are still emitted, empty, so that downstream state
/// ages consistently. A trailing window is emitted only if it holds documents.
pub fn window(
    documents: &[Document],
    start_time: DateTime<Utc>,
    window_size: Duration,
    step_size: Option<Duration>,
) -> StorylineResult<Vec<TimeWindow>> {
    let step_size = step_size.unwrap_or(window_size);
    if window_size <= Duration::zero() || step_size <= Duration::zero() {
        return Err(StorylineError::invalid_config(
            "window_size and step_size must be positive",
        ));
    }
    if step_size > window_size {
        return Err(StorylineError::invalid_config(format!(
            "step_size ({step_size}) is larger than window_size ({window_size})"
        )));
    }

    let mut docs = documents.to_vec();
    docs.sort_by_key(Document::timestamp);

    let mut windows = Vec::new();
    let mut current = Vec::new();
    let mut start = start_time;
    // First index at or past the next window start: where the next window's scan begins.
    let mut resume: Option<usize> = None;
    let mut i = 0;

    while i < docs.len() {
        let t = docs[i].timestamp();
        let next_start = offset(start, step_size)?;
        let end = offset(start, window_size)?;
        if resume.is_none() && t >= next_start {
            resume = Some(i);
        }
        if start <= t && t < end {
            current.push(docs[i].clone());
            i += 1;
        } else if t >= end {
            windows.push(TimeWindow::new(start, end, std::mem::take(&mut current)));
            start = next_start;
            // `t >= end >= next_start`, so `resume` is set.
            i = resume.take().unwrap_or(i);
        } else {
            i += 1;
        }
    }

    if !current.is_empty() {
        let end = offset(start, window_size)?;
        windows.push(TimeWindow::new(start, end, current));
    }

    debug!(
        documents = docs.len(),
        windows = windows.len(),
        window_secs = window_size.num_seconds(),
        step_secs = step_size.num_seconds(),
        "corpus windowed"
    );
    Ok(windows)
}

/// `from + by`, or [`StorylineError::InvalidTimestamp`] past the end of the calendar.
fn offset(from: DateTime<Utc>, by: Duration) -> StorylineResult<DateTime<Utc>> {
    from.checked_add_signed(by)
        .ok_or(StorylineError::InvalidTimestamp {
            seconds: from.timestamp().saturating_add(by.num_seconds()),
        })
}
