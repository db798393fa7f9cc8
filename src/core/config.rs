//! Configuration constants and settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::color::AnsiColor;
use crate::git::Dirtiness;
use crate::path::DEFAULT_TRUNCATOR;

// Path display
pub const DEFAULT_MAX_PATH_LENGTH: usize = 60;

// Time display: Unix seconds
pub const DEFAULT_TIME_FORMAT: &str = "%s";

// Git lookups must not stall the shell
pub const DEFAULT_GIT_TIMEOUT_MS: u64 = 2000;
pub const GIT_DIR_NAME: &str = ".git";
pub const GIT_FILE_SCAN_LINES: usize = 5; // gitdir is typically on the first line
pub const SHORT_HASH_LEN: usize = 7;

// Prompt layout
pub const PROMPT_FIRST_LINE_PREFIX: &str = "┌╼ ";
pub const PROMPT_SECOND_LINE: &str = "└╼ ";

// Config file location, relative to the platform config directory
pub const CONFIG_DIR_NAME: &str = "promptline";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Environment variables
pub const LOG_ENV_VAR: &str = "PROMPTLINE_LOG";
pub const NO_COLOR_ENV_VAR: &str = "NO_COLOR";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// User settings read from `config.toml`; every key is optional
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path budget in chars, 0 disables shortening
    pub max_path_length: usize,
    pub truncator: char,
    /// `chrono` format string
    pub time_format: String,
    pub time_color: AnsiColor,
    pub path_color: AnsiColor,
    pub branch_clean: AnsiColor,
    pub branch_untracked: AnsiColor,
    pub branch_modified: AnsiColor,
    pub git_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            truncator: DEFAULT_TRUNCATOR,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            time_color: AnsiColor::Magenta,
            path_color: AnsiColor::Blue,
            branch_clean: AnsiColor::Green,
            branch_untracked: AnsiColor::Yellow,
            branch_modified: AnsiColor::Red,
            git_timeout_ms: DEFAULT_GIT_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// `<config dir>/promptline/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid promptline configuration")
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Color of the branch name for a given working tree state
    pub fn branch_color(&self, dirtiness: Dirtiness) -> AnsiColor {
        match dirtiness {
            Dirtiness::Clean => self.branch_clean,
            Dirtiness::Untracked => self.branch_untracked,
            Dirtiness::Modified => self.branch_modified,
        }
    }

    pub fn git_timeout(&self) -> Duration {
        Duration::from_millis(self.git_timeout_ms)
    }
}
