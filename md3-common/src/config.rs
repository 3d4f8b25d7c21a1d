//! Playground settings
use crate::store::ViewMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Longest accepted quiet period
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

fn default_debounce_ms() -> u64 {
    300
}

fn default_title() -> String {
    "MD3 Component Playground".to_string()
}

/// YAML settings for the playground. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    /// Quiet period before code and props edits propagate
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub initial_view_mode: ViewMode,
    /// Regenerate the code panel whenever props change
    #[serde(default)]
    pub code_follows_props: bool,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            initial_view_mode: ViewMode::default(),
            code_follows_props: false,
            title: default_title(),
        }
    }
}

impl PlaygroundConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        if config.title.trim().is_empty() {
            return Err(ConfigError::Config("title must not be empty".to_string()));
        }
        if config.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::Config(format!(
                "debounce_ms must be at most {MAX_DEBOUNCE_MS}, got {}",
                config.debounce_ms
            )));
        }
        Ok(config)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
