//! Configuration loading for the game binary.

use std::path::Path;

use delve_bot::BotConfig;
use serde::Deserialize;

use crate::error::{GameError, Result};

/// Main configuration structure.
#[derive(Clone, Debug, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub maps: MapsConfig,
    #[serde(default)]
    pub bot: BotConfig,
}

/// Where to find map files.
#[derive(Clone, Debug, Deserialize)]
pub struct MapsConfig {
    /// Directory listed in the map selection menu (default: "maps")
    #[serde(default = "default_maps_dir")]
    pub dir: String,

    /// Skip the menu and load this map file directly
    #[serde(default)]
    pub fixed: Option<String>,
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            dir: default_maps_dir(),
            fixed: None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            maps: MapsConfig::default(),
            bot: BotConfig::default(),
        }
    }
}

fn default_maps_dir() -> String {
    "maps".to_string()
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GameError::Config(format!("Failed to read config file: {}", e)))?;
        let config: GameConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
