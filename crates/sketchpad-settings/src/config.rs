//! Configuration and settings management for SketchPad
//!
//! Provides configuration file handling, defaults, and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Interaction tuning (drag threshold, polygon snap radius, multi-select key)
//! - History limits
//! - Appearance (default stroke color, selection and preview styles)

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use sketchpad_core::Modifiers;
use std::fmt;
use std::path::{Path, PathBuf};

/// Modifier key that extends the selection instead of replacing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    #[default]
    Shift,
    Control,
}

impl ModifierKey {
    /// Bitmask matched against pointer event modifiers.
    pub fn mask(self) -> Modifiers {
        match self {
            Self::Shift => Modifiers::SHIFT,
            Self::Control => Modifiers::CONTROL,
        }
    }
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shift => write!(f, "Shift"),
            Self::Control => write!(f, "Control"),
        }
    }
}

/// Pointer interaction tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Pointer travel (px, per axis) before a press becomes a drag
    pub drag_threshold: f64,
    /// Distance (px) from the first vertex that closes a polygon
    pub polygon_snap_radius: f64,
    /// Key that turns clicks into toggles and drags into additive drags
    pub multi_select_modifier: ModifierKey,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            drag_threshold: 5.0,
            polygon_snap_radius: 10.0,
            multi_select_modifier: ModifierKey::default(),
        }
    }
}

/// Undo history limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of undo snapshots kept; the oldest is dropped first
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_depth: 50 }
    }
}

/// Stroke colors and dash patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    /// Color given to newly drawn shapes
    pub default_color: String,
    /// Outline color of selected shapes
    pub selection_color: String,
    /// Dash pattern (on, off) of selected shapes
    pub selection_dash: [u32; 2],
    /// Outline color of paste and polygon previews
    pub preview_color: String,
    /// Dash pattern (on, off) of previews
    pub preview_dash: [u32; 2],
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            default_color: "black".to_string(),
            selection_color: "red".to_string(),
            selection_dash: [5, 2],
            preview_color: "gray".to_string(),
            preview_dash: [4, 2],
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pointer interaction tuning
    pub interaction: InteractionSettings,
    /// Undo history limits
    pub history: HistorySettings,
    /// Colors and dash patterns
    pub appearance: AppearanceSettings,
    /// Number of recent files to track
    pub recent_files_count: usize,
    /// Recent files list, most recent first
    pub recent_files: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interaction: InteractionSettings::default(),
            history: HistorySettings::default(),
            appearance: AppearanceSettings::default(),
            recent_files_count: 10,
            recent_files: Vec::new(),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location: `<config_dir>/sketchpad/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("sketchpad").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load the config at `path`, or defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.interaction.drag_threshold > 0.0) {
            return Err(SettingsError::invalid(
                "interaction.drag_threshold",
                "must be > 0",
            ));
        }

        if !(self.interaction.polygon_snap_radius > 0.0) {
            return Err(SettingsError::invalid(
                "interaction.polygon_snap_radius",
                "must be > 0",
            ));
        }

        if self.history.max_depth == 0 {
            return Err(SettingsError::invalid("history.max_depth", "must be > 0"));
        }

        let colors = [
            ("appearance.default_color", &self.appearance.default_color),
            ("appearance.selection_color", &self.appearance.selection_color),
            ("appearance.preview_color", &self.appearance.preview_color),
        ];
        for (key, color) in colors {
            if color.trim().is_empty() {
                return Err(SettingsError::invalid(key, "must not be empty"));
            }
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(self.recent_files_count);
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
