//! Command-line interface for freesound-attributor.
//!
//! This module parses arguments, layers them over the config file, and runs
//! the scan → parse → fetch → report pipeline once.

mod commands;

pub use commands::{Cli, run_command};
