//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cmdic/config.toml` and is only ever read. A missing
//! file means defaults.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::dict::endpoints::{DEFAULT_HOST, DEFAULT_LANGUAGE};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CmdicConfig {
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub session: SessionSettings,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DictionaryConfig {
    pub host: Option<String>,
    pub language: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SessionSettings {
    /// Emphasize the search keyword in example sentences.
    pub highlight: Option<bool>,
    pub example_page: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_EXAMPLE_PAGE: u32 = 1;
pub const DEFAULT_HIGHLIGHT: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub host: String,
    pub language: String,
    pub request_timeout: Option<Duration>,
    pub highlight: Option<String>,
    pub example_page: u32,
    pub example_url: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Values supplied on the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub highlight: Option<String>,
    pub no_highlight: bool,
    pub page: Option<u32>,
    pub example_url: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.cmdic/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cmdic").join("config.toml"))
}

/// Load config from `~/.cmdic/config.toml`.
///
/// A missing file (or home directory) yields `CmdicConfig::default()`. A
/// malformed file is a `ConfigError::Parse`.
pub fn load_config() -> Result<CmdicConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(CmdicConfig::default());
    };

    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(CmdicConfig::default());
    }

    let contents = fs::read_to_string(&path)?;
    let config: CmdicConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Log file: CLI → env. Needs no config file so logging can start before
/// the file is read.
pub fn log_file(cli: &CliOverrides) -> Option<PathBuf> {
    cli.log_file
        .clone()
        .or_else(|| std::env::var("CMDIC_LOG_FILE").ok().map(PathBuf::from))
}

/// Load the config file, falling back to defaults with a warning when it
/// cannot be read or parsed.
pub fn load_config_or_default() -> CmdicConfig {
    load_config().unwrap_or_else(|e| {
        warn!("{}, using defaults", e);
        eprintln!("Warning: {e}, using defaults");
        CmdicConfig::default()
    })
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `keyword` is the default highlight term.
pub fn resolve(config: &CmdicConfig, cli: &CliOverrides, keyword: &str) -> ResolvedConfig {
    // Host: env → config → default
    let host = std::env::var("CMDIC_HOST")
        .ok()
        .or_else(|| config.dictionary.host.clone())
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    // Language: env → config → default
    let language = std::env::var("CMDIC_LANG")
        .ok()
        .or_else(|| config.dictionary.language.clone())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    // Highlight: --no-highlight → --highlight → config toggle (keyword)
    let highlight = if cli.no_highlight {
        None
    } else if let Some(term) = &cli.highlight {
        Some(term.clone())
    } else if config.session.highlight.unwrap_or(DEFAULT_HIGHLIGHT) {
        Some(keyword.to_string())
    } else {
        None
    };

    let log_file = log_file(cli);

    ResolvedConfig {
        host,
        language,
        request_timeout: config
            .dictionary
            .request_timeout_secs
            .map(Duration::from_secs),
        highlight,
        example_page: cli
            .page
            .or(config.session.example_page)
            .unwrap_or(DEFAULT_EXAMPLE_PAGE),
        example_url: cli.example_url.clone(),
        log_file,
    }
}
