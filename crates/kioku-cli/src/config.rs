//! Configuration management for Kioku CLI
//!
//! Reads the prompt library location and memory store settings from
//! ~/.config/kioku/config.toml. A missing file means defaults.

use anyhow::{Context, Result};
use kioku::ImportConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "kioku";
const CONFIG_FILE: &str = "config.toml";

/// Memory store connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_memory_type")]
    pub memory_type: String,
    #[serde(default = "default_importance")]
    pub importance: f32,
}

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,
    #[serde(default)]
    pub store: StoreConfig,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_namespace() -> String {
    "prompts".to_string()
}

fn default_memory_type() -> String {
    "expertise".to_string()
}

fn default_importance() -> f32 {
    0.8
}

fn default_source_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("github")
        .join("ea")
        .join("00-system")
        .join("prompt-library.yaml")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            namespace: default_namespace(),
            api_key: None,
            memory_type: default_memory_type(),
            importance: default_importance(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from the default location, or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or use defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        Ok(config)
    }

    /// Library path with a leading `~/` expanded
    pub fn resolved_source_path(&self) -> PathBuf {
        expand_home(&self.source_path, dirs::home_dir().as_deref())
    }

    /// Importer settings derived from this config
    pub fn import_config(&self) -> ImportConfig {
        ImportConfig::new(self.resolved_source_path())
    }
}

fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.source_path.ends_with("00-system/prompt-library.yaml"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "source_path = \"/srv/prompts.yaml\"\n\n[store]\nnamespace = \"team\"\napi_key = \"secret\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.source_path, PathBuf::from("/srv/prompts.yaml"));
        assert_eq!(config.store.namespace, "team");
        assert_eq!(config.store.api_key.as_deref(), Some("secret"));
        assert_eq!(config.store.base_url, "http://localhost:8000");
        assert_eq!(config.store.memory_type, "expertise");
        assert_eq!(config.store.importance, 0.8);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "source_path = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/me");
        assert_eq!(
            expand_home(Path::new("~/lib/prompts.yaml"), Some(home)),
            PathBuf::from("/home/me/lib/prompts.yaml")
        );
        assert_eq!(
            expand_home(Path::new("/abs/prompts.yaml"), Some(home)),
            PathBuf::from("/abs/prompts.yaml")
        );
        assert_eq!(
            expand_home(Path::new("~/prompts.yaml"), None),
            PathBuf::from("~/prompts.yaml")
        );
    }

    #[test]
    fn test_import_config_uses_source_path() {
        let config = Config {
            source_path: PathBuf::from("/srv/prompts.yaml"),
            ..Config::default()
        };
        assert_eq!(
            config.import_config().source_path,
            PathBuf::from("/srv/prompts.yaml")
        );
    }
}
