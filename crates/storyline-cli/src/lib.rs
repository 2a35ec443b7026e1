//! # storyline-cli
//!
//! File loading, tracing setup, and console rendering around the detection
//! engine. The `storyline` binary is a thin wrapper over [`commands`].

pub mod cli;
pub mod commands;
pub mod render;
pub mod tracing_setup;
