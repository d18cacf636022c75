//! CLI argument definitions and dispatch.
//!
//! There is a single command. Arguments are resolved in three layers:
//! command-line flag, then config file, then the built-in default.

mod attribute;

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{self, Config, FreesoundConfig};
use crate::report;

pub use attribute::cmd_attribute;

/// Freesound Attributor CLI
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Examines a directory and subdirectories for audio files and attempts to collect and save attribution information for the ones that look like they came from Freesound.org",
    long_about = None
)]
pub struct Cli {
    /// Root directory to search for audio files, defaults to current directory
    #[arg(short, long)]
    pub rootdir: Option<PathBuf>,

    /// Space-delimited, case-insensitive file extensions to include in search, ex: ogg wav flac.
    /// Defaults to all valid file extensions on Freesound
    #[arg(short, long, num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Path to output file where attribution information will be saved, defaults to attribution.txt
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Type of project this is, ex. film, game, etc. Defaults to "project"
    #[arg(short, long)]
    pub projecttype: Option<String>,

    /// Obtain the Creative Commons license link for each file. Slower and requires an
    /// internet connection, as every sound's Freesound page is fetched
    #[arg(short, long, overrides_with = "no_collectlicenses")]
    pub collectlicenses: bool,

    /// Don't fetch license links, even if the config file enables it
    #[arg(long, overrides_with = "collectlicenses")]
    pub no_collectlicenses: bool,

    /// Config file to load instead of the default location
    #[arg(long, env = "FREESOUND_ATTRIBUTOR_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Fully resolved run settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub root_dir: PathBuf,
    pub extensions: Vec<String>,
    pub output: PathBuf,
    pub project_type: String,
    pub collect_licenses: bool,
    pub freesound: FreesoundConfig,
}

impl Settings {
    /// Layer command-line flags over a loaded config.
    ///
    /// `cwd` is the root used when neither the flag nor the config names one.
    pub fn resolve(cli: &Cli, config: Config, cwd: PathBuf) -> Self {
        let Config {
            attribution,
            freesound,
        } = config;

        Self {
            root_dir: cli.rootdir.clone().unwrap_or(cwd),
            extensions: cli.extensions.clone().unwrap_or(attribution.extensions),
            output: cli.output.clone().unwrap_or(attribution.output),
            project_type: cli.projecttype.clone().unwrap_or(attribution.project_type),
            collect_licenses: if cli.no_collectlicenses {
                false
            } else {
                cli.collectlicenses || attribution.collect_licenses
            },
            freesound,
        }
    }
}

/// Run the attribution command.
///
/// Returns exit code 1 when some files didn't follow the naming convention;
/// the report has already been written by then.
pub fn run_command(cli: &Cli) -> anyhow::Result<ExitCode> {
    run_with_output(cli, &mut std::io::stdout(), &mut std::io::stderr())
}

/// [`run_command`] with the report echo and invalid-file listing sent to
/// the given writers.
pub(crate) fn run_with_output(
    cli: &Cli,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load(),
    };
    let settings = Settings::resolve(cli, config, std::env::current_dir()?);
    tracing::debug!(?settings, "Got arguments");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let outcome = cmd_attribute(&rt, &settings)?;

    writeln!(out, "{}", report::confirmation(&settings.output, &outcome.document))?;

    if !outcome.invalid.is_empty() {
        write!(err, "{}", report::invalid_report(&outcome.invalid))?;
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
