//! # storyline-consolidation
//!
//! Groups the boxes tracked in a window into storylines.
//! Similar boxes are linked through a Union-Find forest that is rebuilt from
//! scratch every window and flattened into one group per root.

pub mod hierarchy;
pub mod similarity;
pub mod storyline;

pub use hierarchy::{consolidate, Hierarchy};
pub use similarity::similarity;
pub use storyline::Storyline;
