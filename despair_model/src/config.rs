//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::entities::DEFAULT_CHARACTER_COLOR;
use crate::error::{ModelError, ModelResult};
use crate::workspace::CHARACTER_COLORS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Workspace file the CLI reads and writes
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Color used when a palette cannot supply one
    #[serde(default = "default_character_color")]
    pub default_character_color: String,

    /// Colors assigned to new characters in turn
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Directory for exported character records (optional)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

// Defaults
fn default_store_path() -> PathBuf { PathBuf::from("despair-space.json") }
fn default_character_color() -> String { DEFAULT_CHARACTER_COLOR.to_string() }
fn default_palette() -> Vec<String> {
    CHARACTER_COLORS.iter().map(|c| c.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            default_character_color: default_character_color(),
            palette: default_palette(),
            export_dir: None,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text. Missing fields take their defaults.
    pub fn from_toml(text: &str) -> ModelResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ModelError::io(path, e))?;
        let config = Self::from_toml(&text)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults if it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write configuration to a file as TOML.
    pub fn save(&self, path: impl AsRef<Path>) -> ModelResult<()> {
        let path = path.as_ref();
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(|e| ModelError::io(path, e))
    }

    /// The palette for new characters, never empty.
    pub fn effective_palette(&self) -> Vec<String> {
        if self.palette.is_empty() {
            vec![self.default_character_color.clone()]
        } else {
            self.palette.clone()
        }
    }
}
