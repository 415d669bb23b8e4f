//! Command-line interface for vibe-display.
//!
//! `listen` (the default) runs the display. The other commands exercise one
//! stage of the pipeline at a time, which is handy when checking table
//! contents or catalog credentials.

mod commands;

pub use commands::{Cli, Commands, run_command};
