//! Core building blocks shared by the commands
//!
//! - **config**: optional `merge-notes.toml` parsing
//! - **error**: error types with exit codes and help messages
//! - **vcs**: system git backend (`SystemGit`)

pub mod config;
pub mod error;
pub mod vcs;
