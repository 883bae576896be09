//! Configuration and settings management for PalletKit
//!
//! Provides configuration file handling, settings management, and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Platform settings (pallet dimensions)
//! - Block settings (workpiece block dimensions)
//! - Interaction settings (grid snap, collision detection, default margins)

use palletkit_core::constants::{
    DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_WIDTH, DEFAULT_MARGIN, DEFAULT_PALLET_HEIGHT,
    DEFAULT_PALLET_WIDTH,
};
use palletkit_core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Pallet (platform) settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSettings {
    /// Pallet width in mm
    pub width: f64,
    /// Pallet height in mm
    pub height: f64,
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_PALLET_WIDTH,
            height: DEFAULT_PALLET_HEIGHT,
        }
    }
}

/// Workpiece block settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSettings {
    /// Block width in mm, applied to newly added workpieces
    pub width: f64,
    /// Block height in mm, applied to newly added workpieces
    pub height: f64,
}

impl Default for BlockSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_BLOCK_WIDTH,
            height: DEFAULT_BLOCK_HEIGHT,
        }
    }
}

/// Interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionSettings {
    /// Snap dragged pieces to the grid
    pub grid_snap: bool,
    /// Reject moves that would overlap another piece
    pub collision_detection: bool,
    /// Default horizontal margin for batch placement, in mm
    pub x_margin: f64,
    /// Default vertical margin for batch placement, in mm
    pub y_margin: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            grid_snap: true,
            collision_detection: true,
            x_margin: DEFAULT_MARGIN,
            y_margin: DEFAULT_MARGIN,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Last opened layout file. Kept first so TOML emits it before the
    /// section tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_layout_file: Option<PathBuf>,
    /// Pallet dimensions
    #[serde(default)]
    pub platform: PlatformSettings,
    /// Workpiece block dimensions
    #[serde(default)]
    pub block: BlockSettings,
    /// Interaction preferences
    #[serde(default)]
    pub interaction: InteractionSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::other(format!("Failed to read config file: {}", e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(Error::other(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(Error::other(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        std::fs::write(path, content)
            .map_err(|e| Error::other(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.platform.width <= 0.0 || self.platform.height <= 0.0 {
            return Err(Error::other("Platform dimensions must be > 0".to_string()));
        }

        if self.block.width <= 0.0 || self.block.height <= 0.0 {
            return Err(Error::other("Block dimensions must be > 0".to_string()));
        }

        if self.interaction.x_margin < 0.0 || self.interaction.y_margin < 0.0 {
            return Err(Error::other("Margins must not be negative".to_string()));
        }

        Ok(())
    }

    /// Merge another config into this one (preserves existing values for
    /// sections the other config left at zero)
    pub fn merge(&mut self, other: &Config) {
        if other.platform.width > 0.0 && other.platform.height > 0.0 {
            self.platform = other.platform.clone();
        }
        if other.block.width > 0.0 && other.block.height > 0.0 {
            self.block = other.block.clone();
        }
        self.interaction = other.interaction.clone();
        if other.last_layout_file.is_some() {
            self.last_layout_file = other.last_layout_file.clone();
        }
    }

    /// Default config file location under the platform config directory
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("palletkit")
            .join("config.json")
    }
}
