//! # storyline-temporal
//!
//! Time windowing over a fully materialized corpus.

pub mod windower;

pub use windower::window;
