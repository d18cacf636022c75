//! Freesound Attributor - credits for sounds downloaded from Freesound.org.
//!
//! Scans a directory tree for audio files named the way Freesound names its
//! downloads (`{id}__{user}__{name}.{ext}`), optionally looks up each sound's
//! Creative Commons license, and writes an attribution text file.

pub mod attribution;
pub mod cli;
pub mod config;
pub mod error;
pub mod freesound;
pub mod report;
pub mod scanner;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<ExitCode> {
    let args = cli::Cli::parse();

    // Initialize logging; stdout is reserved for the report echo
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("freesound_attributor=info".parse()?))
        .init();

    cli::run_command(&args)
}
