//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\freesound-attributor\config.toml
//! - macOS: ~/Library/Application Support/freesound-attributor/config.toml
//! - Linux: ~/.config/freesound-attributor/config.toml
//!
//! Every value here is a default that command-line flags override. The file
//! is optional; an explicit `--config` path is not.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Every file extension Freesound accepts for uploads.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ogg", "wav", "flac", "fla", "mp3", "aiff", "aif"];

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "attribution.txt";

/// Default label substituted into the report header.
pub const DEFAULT_PROJECT_TYPE: &str = "project";

/// Default site root used to build sound page URLs.
pub const DEFAULT_BASE_URL: &str = "https://freesound.org";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What to scan for and how to write the report
    pub attribution: AttributionConfig,

    /// Freesound site access
    pub freesound: FreesoundConfig,
}

/// Scan and report defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributionConfig {
    /// Extensions to include, without leading dot
    pub extensions: Vec<String>,

    /// Output file path
    pub output: PathBuf,

    /// Project label, ex. "film" or "game"
    pub project_type: String,

    /// Fetch the license link for every sound
    pub collect_licenses: bool,
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            project_type: DEFAULT_PROJECT_TYPE.to_string(),
            collect_licenses: false,
        }
    }
}

/// Freesound HTTP settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FreesoundConfig {
    /// Site root, without trailing slash
    pub base_url: String,

    /// User-Agent override (empty = built-in)
    pub user_agent: String,
}

impl Default for FreesoundConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: String::new(),
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("freesound-attributor"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            tracing::warn!("Using default configuration");
            Config::default()
        }
    }
}

/// Load configuration from an explicit path
///
/// Unlike [`load`], a missing or malformed file is an error.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    let config = toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
    tracing::info!("Loaded config from {:?}", path);
    Ok(config)
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),
}

// ============================================================================
// Tests
// ============================================================================
