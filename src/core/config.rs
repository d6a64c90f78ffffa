//! Configuration constants and settings
//!
//! Every setting comes from four places, and the first source that has a
//! value wins:
//! 1. command line flag
//! 2. `VAINPATH_*` environment variable
//! 3. `config.toml` in the user's config directory
//! 4. built-in default

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// Shortening
pub const MIN_SHORTENABLE_LEN: usize = 4; // Paths below this byte length are never collapsed
pub const DEFAULT_TAIL: &str = "…";

// Environment variables
pub const SEPARATOR_ENV: &str = "VAINPATH_SEPARATOR";
pub const TAIL_ENV: &str = "VAINPATH_TAIL";
pub const MAX_WIDTH_ENV: &str = "VAINPATH_MAX_WIDTH";
pub const TILDE_ENV: &str = "VAINPATH_TILDE";
pub const CLEAN_ENV: &str = "VAINPATH_CLEAN";

// Config file location, relative to `dirs::config_dir()`
pub const CONFIG_DIR_NAME: &str = "vainpath";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Contents of `config.toml`; every key is optional
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub separator: Option<char>,
    pub tail: Option<String>,
    pub max_width: Option<usize>,
    pub tilde: Option<bool>,
    pub clean: Option<bool>,
}

impl FileConfig {
    /// Reads and parses a config file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Loads the default config file, or an empty config when there is none
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// `<config_dir>/vainpath/config.toml`, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Values taken from `VAINPATH_*` environment variables
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnvConfig {
    pub separator: Option<char>,
    pub tail: Option<String>,
    pub max_width: Option<usize>,
    pub tilde: Option<bool>,
    pub clean: Option<bool>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            separator: env_value(SEPARATOR_ENV),
            tail: std::env::var(TAIL_ENV).ok(),
            max_width: env_value(MAX_WIDTH_ENV),
            tilde: env_value(TILDE_ENV),
            clean: env_value(CLEAN_ENV),
        }
    }
}

/// Parses an environment variable, warning about and ignoring unparsable values
fn env_value<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("⚠️  Ignoring invalid {name} value: {raw:?}");
            None
        }
    }
}

/// Overrides given on the command line
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub separator: Option<char>,
    pub tail: Option<String>,
    pub max_width: Option<usize>,
    pub no_tilde: bool,
    pub no_clean: bool,
}

/// Fully resolved settings for rendering a path
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Single ASCII separator byte
    pub separator: u8,
    /// Tail marker used when `max_width` cuts the shortened path
    pub tail: String,
    /// Code-point budget for the shortened path; `None` disables truncation
    pub max_width: Option<usize>,
    /// Replace the home directory prefix with `~`
    pub tilde: bool,
    /// Lexically clean the path before collapsing
    pub clean: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: std::path::MAIN_SEPARATOR as u8,
            tail: DEFAULT_TAIL.to_string(),
            max_width: None,
            tilde: true,
            clean: true,
        }
    }
}

impl Settings {
    /// Merges the three sources in priority order over the defaults.
    ///
    /// `--no-tilde` and `--no-clean` can only switch a toggle off.
    pub fn resolve(cli: CliConfig, env: EnvConfig, file: FileConfig) -> Result<Self> {
        let defaults = Self::default();

        let separator = match cli.separator.or(env.separator).or(file.separator) {
            Some(c) => parse_separator(c)?,
            None => defaults.separator,
        };
        let tail = cli.tail.or(env.tail).or(file.tail).unwrap_or(defaults.tail);
        // A width of 0 in any source means "no limit"
        let max_width = cli
            .max_width
            .or(env.max_width)
            .or(file.max_width)
            .filter(|&width| width > 0);
        let tilde = !cli.no_tilde && env.tilde.or(file.tilde).unwrap_or(defaults.tilde);
        let clean = !cli.no_clean && env.clean.or(file.clean).unwrap_or(defaults.clean);

        let settings = Self { separator, tail, max_width, tilde, clean };
        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

/// Validates a separator character, which must fit in one ASCII byte
pub fn parse_separator(c: char) -> Result<u8> {
    if !c.is_ascii() {
        return Err(anyhow!("Separator must be a single ASCII character, got {c:?}"));
    }
    if c.is_ascii_alphanumeric() || c.is_ascii_control() {
        return Err(anyhow!("Separator cannot be a letter, digit or control character: {c:?}"));
    }
    Ok(c as u8)
}
