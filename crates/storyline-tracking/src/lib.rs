//! # storyline-tracking
//!
//! The box tracker. Each word pair moves through
//! `UNTRACKED → ACTIVE → EXPIRED`: a box is opened when the pair first meets
//! the significance threshold in a window, grows while the pair keeps
//! reappearing, and is dropped once it goes stale.

pub mod bucketize;
pub mod table;

pub use bucketize::{bucketize, bucketize_with_stats, BucketizeStats, TrackingPolicy};
pub use table::TrackingTable;
