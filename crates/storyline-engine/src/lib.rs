//! # storyline-engine
//!
//! The pipeline driver. Windows the corpus, then for each window in order:
//! bucketize into the tracking table carried over from the previous window,
//! consolidate the surviving boxes, and emit the window's storylines.

pub mod detector;

pub use detector::{event_detect, EventDetector};
