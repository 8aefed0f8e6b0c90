use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{QaTagError, Result};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "qatag.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".qatag.toml";

/// Represents the complete configuration for git-qa-tag.
///
/// Contains the remote to push to, the manifest to read the version from,
/// the git backend to use and the ticket extraction patterns.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default)]
    pub backend: Backend,

    #[serde(default)]
    pub ticket: TicketConfig,
}

/// Which implementation performs git operations.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Shell out to the `git` executable; honours the user's credential helpers.
    #[default]
    Cli,
    /// Use libgit2 through the `git2` crate.
    Libgit2,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_manifest() -> String {
    "package.json".to_string()
}

fn default_ticket_pattern() -> String {
    r"([A-Z]+-\d+|\d+)".to_string()
}

fn default_strip_prefix() -> String {
    r"^[A-Z]+-".to_string()
}

/// Patterns used to find and normalise the ticket in a branch name.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TicketConfig {
    /// First match in the branch name is the ticket.
    #[serde(default = "default_ticket_pattern")]
    pub pattern: String,

    /// Removed from the ticket before it is used in the tag.
    #[serde(default = "default_strip_prefix")]
    pub strip_prefix: String,
}

impl Default for TicketConfig {
    fn default() -> Self {
        TicketConfig {
            pattern: default_ticket_pattern(),
            strip_prefix: default_strip_prefix(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            manifest: default_manifest(),
            backend: Backend::default(),
            ticket: TicketConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `qatag.toml` in current directory
/// 3. `.qatag.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)
            .map_err(|e| QaTagError::config(format!("Cannot read '{}': {}", path, e)))?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration text, rejecting ticket patterns that are not valid regexes.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| QaTagError::config(e.to_string()))?;

    for (key, pattern) in [
        ("ticket.pattern", &config.ticket.pattern),
        ("ticket.strip_prefix", &config.ticket.strip_prefix),
    ] {
        regex::Regex::new(pattern)
            .map_err(|e| QaTagError::config(format!("Invalid {} '{}': {}", key, pattern, e)))?;
    }

    Ok(config)
}
