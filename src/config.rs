use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::{BumpKind, DEFAULT_PRERELEASE_TAG};
use crate::error::{BumpError, Result};

/// File name looked up in the current directory
pub const PROJECT_CONFIG_FILE: &str = "semver-bump.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".semver-bump.toml";

/// Represents the complete configuration for semver-bump.
///
/// Every key is optional; command-line flags take precedence over it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub bump: BumpConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Returns the default bump kind.
fn default_kind() -> String {
    BumpKind::default().to_string()
}

/// Returns the default tag for new prerelease trains.
fn default_prerelease_tag() -> String {
    DEFAULT_PRERELEASE_TAG.to_string()
}

/// Returns the default log filter.
fn default_log_level() -> String {
    "warn".to_string()
}

/// Defaults for the bump directive.
///
/// Values are kept as text and validated when the directive is built, so a
/// bad `kind` surfaces as `InvalidBumpKind` just like a bad flag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BumpConfig {
    #[serde(default = "default_kind")]
    pub kind: String,

    #[serde(default = "default_prerelease_tag")]
    pub prerelease_tag: String,
}

impl Default for BumpConfig {
    fn default() -> Self {
        BumpConfig {
            kind: default_kind(),
            prerelease_tag: default_prerelease_tag(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Filter used when neither `RUST_LOG` nor `-v`/`-q` are given
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

/// Locates the configuration file to load, if any.
///
/// Search order:
/// 1. Custom path provided as parameter
/// 2. `semver-bump.toml` in the current directory
/// 3. `.semver-bump.toml` in the user config directory
pub fn find_config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let project = Path::new(".").join(PROJECT_CONFIG_FILE);
    if project.exists() {
        return Some(project);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file was found but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match find_config_file(config_path) {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            parse_config_file(&path)
        }
        None => {
            debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        BumpError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bump.kind, "patch");
        assert_eq!(config.bump.prerelease_tag, "rc");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: Config = toml::from_str("[bump]\nkind = \"minor\"\n").unwrap();
        assert_eq!(config.bump.kind, "minor");
        assert_eq!(config.bump.prerelease_tag, "rc");
    }

    #[test]
    fn test_explicit_path_wins() {
        assert_eq!(
            find_config_file(Some("custom.toml")),
            Some(PathBuf::from("custom.toml"))
        );
    }

    #[test]
    fn test_missing_explicit_file_is_config_error() {
        let err = load_config(Some("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, BumpError::Config(_)));
        assert!(err.to_string().contains("definitely/not/here.toml"));
    }
}
