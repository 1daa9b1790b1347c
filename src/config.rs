//! Host configuration.
//!
//! Read from `<config dir>/dui/config.json` (e.g. `~/.config/dui/config.json`)
//! or from a path given on the command line. Every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::Color;
use crate::text::Font;

/// Default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dui")
        .join("config.json")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub font: Font,
    pub width: u32,
    pub height: u32,
    /// Canvas clear color.
    pub background: Color,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font: Font::default(),
            width: 640,
            height: 480,
            background: Color::rgb(32, 36, 44),
        }
    }
}

impl UiConfig {
    /// Load from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = default_path();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: UiConfig = serde_json::from_str(r#"{"width": 320}"#).unwrap();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, UiConfig::default().height);
        assert_eq!(config.font, Font::default());
    }

    #[test]
    fn save_then_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = UiConfig { width: 100, ..UiConfig::default() };
        config.save(&path).unwrap();
        assert_eq!(UiConfig::load_from(&path).unwrap(), config);
    }
}
