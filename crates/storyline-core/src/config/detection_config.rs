use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{MAX_BOX_SIMILARITY, MAX_WINDOW_HOURS};
use crate::errors::{StorylineError, StorylineResult};

/// Windowing, tracking and consolidation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Width of each time window, in hours.
    pub window_size_hours: u32,
    /// Distance between consecutive window starts. `None` means non-overlapping.
    pub window_step_hours: Option<u32>,
    /// Minimum document count for a word pair to start being tracked.
    pub significance_threshold: usize,
    /// Grace period applied when expiring boxes, in hours.
    pub box_keepalive_hours: u32,
    /// Minimum box similarity for two boxes to join one storyline.
    pub similarity_threshold: f64,
    /// Abort the run if it takes longer than this many seconds.
    pub deadline_secs: Option<u64>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            window_size_hours: defaults::DEFAULT_WINDOW_SIZE_HOURS,
            window_step_hours: None,
            significance_threshold: defaults::DEFAULT_SIGNIFICANCE_THRESHOLD,
            box_keepalive_hours: defaults::DEFAULT_BOX_KEEPALIVE_HOURS,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            deadline_secs: None,
        }
    }
}

impl DetectionConfig {
    pub fn window_size(&self) -> Duration {
        Duration::hours(i64::from(self.window_size_hours))
    }

    pub fn window_step(&self) -> Duration {
        Duration::hours(i64::from(
            self.window_step_hours.unwrap_or(self.window_size_hours),
        ))
    }

    pub fn keepalive(&self) -> Duration {
        Duration::hours(i64::from(self.box_keepalive_hours))
    }

    /// Reject parameter combinations the detector cannot run with.
    pub fn validate(&self) -> StorylineResult<()> {
        if self.window_size_hours == 0 {
            return Err(StorylineError::invalid_config(
                "window_size_hours must be at least 1",
            ));
        }
        if self.window_size_hours > MAX_WINDOW_HOURS {
            return Err(StorylineError::invalid_config(format!(
                "window_size_hours ({}) exceeds {MAX_WINDOW_HOURS}",
                self.window_size_hours
            )));
        }
        if self.box_keepalive_hours > MAX_WINDOW_HOURS {
            return Err(StorylineError::invalid_config(format!(
                "box_keepalive_hours ({}) exceeds {MAX_WINDOW_HOURS}",
                self.box_keepalive_hours
            )));
        }
        if let Some(step) = self.window_step_hours {
            if step == 0 {
                return Err(StorylineError::invalid_config(
                    "window_step_hours must be at least 1",
                ));
            }
            if step > self.window_size_hours {
                return Err(StorylineError::invalid_config(format!(
                    "window_step_hours ({step}) is larger than window_size_hours ({})",
                    self.window_size_hours
                )));
            }
        }
        if self.significance_threshold == 0 {
            return Err(StorylineError::invalid_config(
                "significance_threshold must be at least 1",
            ));
        }
        if !(0.0..=MAX_BOX_SIMILARITY).contains(&self.similarity_threshold) {
            return Err(StorylineError::invalid_config(format!(
                "similarity_threshold {} is outside [0, {MAX_BOX_SIMILARITY}]",
                self.similarity_threshold
            )));
        }
        Ok(())
    }
}
