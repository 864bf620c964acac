use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::Result;

/// Project-local configuration file name
pub const CONFIG_FILE: &str = "bumpversion.toml";

static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("list separator is a valid regex"));

/// Represents the complete configuration for bump-version.
///
/// Holds the source files that carry the version and the behavior switches.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Files holding a version constant or `@version` annotation.
    /// Accepts a comma-separated string or a TOML array.
    #[serde(
        rename = "VersionFrom",
        alias = "version_from",
        default,
        deserialize_with = "deserialize_file_list"
    )]
    pub version_from: Vec<String>,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Zero lower-order components when bumping a higher one.
    /// Off by default: `1.2.3` bumped minor becomes `1.3.3`.
    #[serde(default)]
    pub reset_lower: bool,

    /// Fail instead of bumping from `0.0.0` when no usable version is found
    #[serde(default)]
    pub require_version_source: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FileList {
    Joined(String),
    Items(Vec<String>),
}

fn deserialize_file_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FileList::deserialize(deserializer)? {
        FileList::Joined(joined) => split_file_list(&joined),
        FileList::Items(items) => items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

/// Splits a `VersionFrom` value on commas, ignoring surrounding whitespace.
///
/// # Example
/// ```
/// use bump_version::config::split_file_list;
///
/// assert_eq!(split_file_list(" src/A.php ,src/B.php"), vec!["src/A.php", "src/B.php"]);
/// ```
pub fn split_file_list(value: &str) -> Vec<String> {
    let value = value.trim();
    if value.is_empty() {
        return Vec::new();
    }
    LIST_SEPARATOR
        .split(value)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumpversion.toml` in current directory
/// 3. `~/.config/.bumpversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE).exists() {
        fs::read_to_string(CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
