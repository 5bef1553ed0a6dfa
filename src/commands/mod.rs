//! CLI commands for merge-notes
//!
//! - **generate**: write a release-note stub for a before/after ref pair

pub mod generate;

pub use generate::{GenerateOptions, run_generate};
