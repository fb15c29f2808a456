//! Configuration types.
//!
//! Configuration lives in an optional TOML file at
//! `<config_dir>/cardstack/config.toml`. Every field has a default, so a
//! missing file or a missing section is never an error.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::card::Card;
use crate::error::ConfigError;
use crate::factory::{
    CardFactory, ChannelRange, DEFAULT_CARD_COUNT, DEFAULT_CHANNEL_FLOOR, DEFAULT_IMAGE_VARIANTS,
};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "CARDSTACK_CONFIG";

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Card generation settings
    #[serde(default)]
    pub cards: CardsConfig,

    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,

    /// Transition settings
    #[serde(default)]
    pub animation: AnimationConfig,
}

/// Card generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardsConfig {
    /// Number of cards in the list.
    pub count: usize,
    /// Lower bound for each color channel.
    pub channel_floor: f32,
    /// Upper bound for each color channel.
    pub channel_ceiling: f32,
    /// Number of image assets cycled through.
    pub image_variants: usize,
    /// Fixed seed for reproducible colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_CARD_COUNT,
            channel_floor: DEFAULT_CHANNEL_FLOOR,
            channel_ceiling: 1.0,
            image_variants: DEFAULT_IMAGE_VARIANTS,
            seed: None,
        }
    }
}

impl CardsConfig {
    /// Build a factory from these settings.
    pub fn factory(&self) -> Result<CardFactory, ConfigError> {
        if self.image_variants == 0 {
            return Err(ConfigError::Invalid {
                field: "cards.image_variants",
                reason: "must be at least 1".to_string(),
            });
        }
        let range = ChannelRange::new(self.channel_floor, self.channel_ceiling)?;
        Ok(CardFactory::new(self.count, range, self.image_variants))
    }

    /// Build the card collection once for the life of the process.
    ///
    /// Invalid settings fall back to [`CardFactory::default`]. The seed is
    /// honored either way.
    pub fn build_cards(&self) -> Vec<Card> {
        let factory = self.factory().unwrap_or_else(|e| {
            tracing::error!("Invalid card settings: {} - using defaults", e);
            CardFactory::default()
        });

        match self.seed {
            Some(seed) => {
                tracing::info!("Using color seed {}", seed);
                factory.build_seeded(seed)
            }
            None => factory.build_random(),
        }
    }
}

/// Appearance configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Theme mode: "light", "dark", or "system"
    #[serde(default)]
    pub theme: ThemeMode,

    /// Directory holding `<image>.png` assets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
}

/// Theme mode selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

/// Transition configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Length of the expand/collapse transition.
    pub duration_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { duration_ms: 350 }
    }
}

impl AnimationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        tracing::info!("Loading config from {:?}", path);
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Load from `$CARDSTACK_CONFIG` or the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;
        Self::load_from(&path)
    }

    /// Like [`load`](Self::load), but any error yields the defaults.
    pub fn load_or_default() -> Self {
        Self::or_default(Self::load())
    }

    /// Like [`load_from`](Self::load_from), but any error yields the defaults.
    pub fn load_from_or_default(path: &Path) -> Self {
        Self::or_default(Self::load_from(path))
    }

    fn or_default(result: Result<Self, ConfigError>) -> Self {
        result.unwrap_or_else(|e| {
            tracing::error!("Config error: {} - continuing with defaults", e);
            Self::default()
        })
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cards.factory().map(|_| ())
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("cardstack"))
}

/// Resolve the config file path.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    config_path_from(std::env::var_os(CONFIG_PATH_ENV))
}

/// Resolve the config file path given the value of `$CARDSTACK_CONFIG`.
fn config_path_from(env: Option<OsString>) -> Result<PathBuf, ConfigError> {
    match env {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => config_dir()
            .map(|dir| dir.join("config.toml"))
            .ok_or(ConfigError::NoConfigDir),
    }
}
