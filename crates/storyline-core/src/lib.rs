//! # storyline-core
//!
//! Foundation crate for the Storyline event detector.
//! Defines the shared models, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::StorylineConfig;
pub use errors::{StorylineError, StorylineResult};
pub use models::{
    ConsolidatedGroup, Document, EventBox, TimeWindow, Timeline, TimelineEntry, WordPair,
};
