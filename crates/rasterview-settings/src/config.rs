//! Configuration for RasterView
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform-specific config directory.
//!
//! Configuration is organized into logical sections:
//! - Viewer settings (colours, zoom behaviour, selection)
//! - History settings (undo capacity)
//! - Logging settings (level, output format)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use rasterview_core::constants::{
    DEFAULT_FIT_INSET, DEFAULT_UNDO_CAPACITY, DEFAULT_ZOOM_STEP, FIT_SCALE, MAX_SCALE,
};
use rasterview_core::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Viewer preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Panel background, also substituted for transparent image pixels
    pub background: Color,
    /// Colour of the rubber-band box drawn while selecting
    pub selection_color: Color,
    /// Margin removed from the panel before computing a fit scale
    pub fit_inset: f64,
    /// Scale applied to freshly loaded images (-1 for fit)
    pub initial_scale: f64,
    /// Factor applied per mouse wheel notch
    pub zoom_step: f64,
    /// Whether drag-selection starts enabled
    pub selection_enabled: bool,
    /// Record pointer interactions in the interaction log
    pub log_interactions: bool,
    /// Oldest interactions are dropped beyond this many; 0 keeps everything
    pub interaction_log_capacity: usize,
    /// Panel width assumed until the host reports one
    pub panel_width: u32,
    /// Panel height assumed until the host reports one
    pub panel_height: u32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            selection_color: Color::RED,
            fit_inset: DEFAULT_FIT_INSET,
            initial_scale: 1.0,
            zoom_step: DEFAULT_ZOOM_STEP,
            selection_enabled: false,
            log_interactions: false,
            interaction_log_capacity: 0,
            panel_width: 800,
            panel_height: 600,
        }
    }
}

/// Undo/redo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Whether undo points are recorded at all
    pub enabled: bool,
    /// Number of entries kept on each of the undo and redo stacks
    pub capacity: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: DEFAULT_UNDO_CAPACITY,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level directive, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Viewer preferences
    pub viewer: ViewerSettings,
    /// Undo/redo preferences
    pub history: HistorySettings,
    /// Logging preferences
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`<config dir>/rasterview/config.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("rasterview").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Loads the config from the default location, falling back to defaults
    /// when no file exists yet.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format_of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let viewer = &self.viewer;

        let scale = viewer.initial_scale;
        if scale != FIT_SCALE && !(scale > 0.0 && scale <= MAX_SCALE) {
            return Err(out_of_range("viewer.initial_scale", scale));
        }

        if viewer.fit_inset.is_nan() || viewer.fit_inset < 0.0 {
            return Err(out_of_range("viewer.fit_inset", viewer.fit_inset));
        }

        if viewer.zoom_step.is_nan() || viewer.zoom_step <= 1.0 {
            return Err(out_of_range("viewer.zoom_step", viewer.zoom_step));
        }

        if viewer.panel_width == 0 || viewer.panel_height == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "viewer.panel_size".to_string(),
                value: format!("{}x{}", viewer.panel_width, viewer.panel_height),
            });
        }

        if self.history.capacity == 0 {
            return Err(out_of_range("history.capacity", 0));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
