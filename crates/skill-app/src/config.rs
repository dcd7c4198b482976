// File: src/config.rs
// Purpose: Configuration parsing from skill.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use skill_router::HistoryMode;
use std::fs;
use std::path::Path;

/// Default config file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "skill.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Which history implementation the router is installed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    /// HTML5 history (paths in the URL path)
    #[default]
    Web,
    /// Paths after `#` in the URL
    Hash,
    /// In-memory only
    Memory,
}

/// Router configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    #[serde(default)]
    pub history: HistoryKind,

    /// Base path the app is served under (e.g., "/app")
    #[serde(default = "default_base")]
    pub base: String,

    /// Whether static segments match case-insensitively (default: false)
    #[serde(default = "default_false")]
    pub case_insensitive: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base() -> String {
    "/".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history: HistoryKind::default(),
            base: default_base(),
            case_insensitive: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./skill.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// History mode described by the `[router]` section
    pub fn history_mode(&self) -> HistoryMode {
        let base = &self.router.base;
        match self.router.history {
            HistoryKind::Web => HistoryMode::web(base),
            HistoryKind::Hash => HistoryMode::hash(base),
            HistoryKind::Memory => HistoryMode::memory(base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.router.history, HistoryKind::Web);
        assert_eq!(config.router.base, "/");
        assert!(!config.router.case_insensitive);
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.history_mode(), HistoryMode::web("/"));
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<AppConfig>("").unwrap_or_default();
        assert_eq!(config.router.base, "/");
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_hash_history_under_base() {
        let toml = r#"
            [router]
            history = "hash"
            base = "/learn/"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.history_mode(), HistoryMode::hash("/learn"));
        assert!(!config.router.case_insensitive);
    }

    #[test]
    fn test_unknown_history_kind_is_rejected() {
        let toml = r#"
            [router]
            history = "abstract"
        "#;
        assert!(toml::from_str::<AppConfig>(toml).is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load("does/not/exist/skill.toml").unwrap();
        assert_eq!(config.router.history, HistoryKind::Web);
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            "[router]\nhistory = \"memory\"\ncase_insensitive = true\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.router.history, HistoryKind::Memory);
        assert!(config.router.case_insensitive);
        assert_eq!(config.router.base, "/");
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.history_mode(), HistoryMode::memory("/"));
    }

    #[test]
    fn test_load_blank_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "\n   \n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.router.history, HistoryKind::Web);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_load_malformed_file_reports_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[router\nhistory = ").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
