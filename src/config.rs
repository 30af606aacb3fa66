//! Configuration persistence for the quiz app.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration that persists between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The currently selected theme name.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Question bank to load instead of the bundled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<PathBuf>,

    /// How long correct/incorrect feedback stays on screen.
    #[serde(default = "default_feedback_millis")]
    pub feedback_millis: u64,

    /// Horizontal columns a drag must travel to count as a swipe.
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: u16,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_feedback_millis() -> u64 {
    2000
}

fn default_swipe_threshold() -> u16 {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            bank: None,
            feedback_millis: default_feedback_millis(),
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("swipe-quiz")
            .join("config.toml")
    }

    /// Load config from disk, returning default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.feedback_millis, 2000);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"kanagawa-wave\"\nswipe_threshold = 10\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "kanagawa-wave");
        assert_eq!(config.swipe_threshold, 10);
        assert_eq!(config.feedback_millis, 2000);
        assert!(config.bank.is_none());
    }

    #[test]
    fn save_then_load_keeps_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            bank: Some(PathBuf::from("/tmp/bank.json")),
            feedback_millis: 500,
            ..Config::default()
        };

        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
