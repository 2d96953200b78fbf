use richflow_engine::{EditError, Flow, Style, StyleValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Host-side settings for embedding the editing core.
///
/// ```toml
/// [display]
/// paragraph_separator = "¶"
///
/// [styles.heading]
/// fontSize = 24
/// fontWeight = "bold"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    /// Named style presets, property name to value
    pub styles: BTreeMap<String, BTreeMap<String, StyleValue>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Glyph rendered at each paragraph terminator by `display_text`
    pub paragraph_separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            paragraph_separator: "¶".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // A preset without properties can never become a Style
        config.drop_empty_presets();

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/richflow");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn drop_empty_presets(&mut self) {
        self.styles.retain(|_, properties| !properties.is_empty());
    }

    /// Names of the loaded presets, sorted
    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Preset `name` as a style; `None` if it is missing or has no properties
    pub fn style(&self, name: &str) -> Option<Style> {
        self.styles
            .get(name)
            .and_then(|properties| Style::from_properties(properties.clone()))
    }

    /// Register `style` under `name`, replacing any existing preset
    pub fn set_style(&mut self, name: impl Into<String>, style: &Style) {
        self.styles.insert(name.into(), style.properties().clone());
    }

    /// Whole-document text with the configured separator at every terminator
    pub fn display_text(&self, flow: &Flow) -> Result<String, EditError> {
        flow.text_between(0, None, &self.display.paragraph_separator)
    }
}
