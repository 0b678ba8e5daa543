//! Game configuration
//!
//! Loads settings from an optional RON file, with fallback to compiled-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the game looks for its config file
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Raylib 2D RPG".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Camera zoom settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub zoom_initial: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Zoom change per mouse wheel notch
    pub zoom_step: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom_initial: 3.0,
            zoom_min: 3.0,
            zoom_max: 8.0,
            zoom_step: 0.125,
        }
    }
}

/// Audio settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            master_volume: 1.0,
        }
    }
}

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub target_fps: u32,
    /// Path of the spritesheet image
    pub spritesheet: PathBuf,
    pub camera: CameraConfig,
    pub audio: AudioConfig,
    /// Fixed world seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            target_fps: 60,
            spritesheet: PathBuf::from("resources/colored_tilemap_packed.png"),
            camera: CameraConfig::default(),
            audio: AudioConfig::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load the config from `assets/config.ron`, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(CONFIG_PATH);
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}. Using default config.", e);
                Self::default()
            }
        }
    }

    /// Read, parse and validate a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse and validate a config from RON text
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty RON
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Reject settings the game cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be positive".to_string()));
        }

        let cam = &self.camera;
        if !(cam.zoom_min > 0.0
            && cam.zoom_min <= cam.zoom_initial
            && cam.zoom_initial <= cam.zoom_max
            && cam.zoom_max.is_finite())
        {
            return Err(ConfigError::Invalid(format!(
                "zoom must satisfy 0 < min <= initial <= max, got {} / {} / {}",
                cam.zoom_min, cam.zoom_initial, cam.zoom_max
            )));
        }
        // NaN fails every comparison, so test for the good case
        if !(cam.zoom_step > 0.0 && cam.zoom_step.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "zoom_step must be a positive number, got {}",
                cam.zoom_step
            )));
        }

        if !(0.0..=1.0).contains(&self.audio.master_volume) {
            return Err(ConfigError::Invalid(format!(
                "master_volume must be within 0.0 - 1.0, got {}",
                self.audio.master_volume
            )));
        }

        Ok(())
    }
}
