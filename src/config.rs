use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HeraldError, Result};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "herald.toml";

const MAX_GH_ATTEMPTS: u32 = 10;

/// Represents the complete configuration for herald.
///
/// Every section is optional; command-line flags override file values.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,

    #[serde(default)]
    pub retry: RetryConfig,
}

/// Model selection.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Claude model alias or full name (e.g. "sonnet", "opus")
    #[serde(default)]
    pub model: Option<String>,
}

/// Where notes are written and what gets appended to them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory for notes and prompt files when `--output` is not given
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,

    #[serde(default = "default_true")]
    pub footer: bool,

    #[serde(default = "default_true")]
    pub changelog_link: bool,
}

/// Returns `<system temp>/herald`.
pub fn default_output_dir() -> PathBuf {
    std::env::temp_dir().join("herald")
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: default_output_dir(),
            footer: true,
            changelog_link: true,
        }
    }
}

/// Runtime behavior toggles.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Ask before updating the release
    #[serde(default = "default_true")]
    pub confirm: bool,

    /// Run `git fetch --tags` before resolving releases
    #[serde(default = "default_true")]
    pub fetch_tags: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            confirm: true,
            fetch_tags: true,
        }
    }
}

/// Retry limits for hosting-platform calls.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RetryConfig {
    /// Attempts per gh call when rate limited
    #[serde(default = "default_gh_attempts")]
    pub gh_attempts: u32,
}

fn default_gh_attempts() -> u32 {
    3
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            gh_attempts: default_gh_attempts(),
        }
    }
}

impl RetryConfig {
    /// `gh_attempts` clamped to 1..=10
    pub fn gh_attempts(&self) -> u32 {
        self.gh_attempts.clamp(1, MAX_GH_ATTEMPTS)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `herald.toml` in current directory
/// 3. `herald.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(HeraldError::Config)` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(),
    };

    match path {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            parse_config_file(&path)
        }
        None => Ok(Config::default()),
    }
}

fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        HeraldError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&content)
        .map_err(|e| HeraldError::config(format!("invalid {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.generation.model, None);
        assert!(config.output.footer);
        assert!(config.output.changelog_link);
        assert!(config.behavior.confirm);
        assert!(config.behavior.fetch_tags);
        assert_eq!(config.retry.gh_attempts(), 3);
        assert!(config.output.directory.ends_with("herald"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[generation]\nmodel = \"haiku\"\n").unwrap();
        assert_eq!(config.generation.model.as_deref(), Some("haiku"));
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.behavior, BehaviorConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(toml::from_str::<Config>("[generation]\nmodle = \"x\"\n").is_err());
    }

    #[test]
    fn test_gh_attempts_clamped() {
        assert_eq!(RetryConfig { gh_attempts: 0 }.gh_attempts(), 1);
        assert_eq!(RetryConfig { gh_attempts: 50 }.gh_attempts(), 10);
    }
}
