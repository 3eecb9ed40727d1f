//! SketchPad Settings Crate
//!
//! Handles editor configuration: defaults, JSON/TOML persistence and validation.

pub mod config;
pub mod error;

pub use config::{AppearanceSettings, Config, HistorySettings, InteractionSettings, ModifierKey};
pub use error::{SettingsError, SettingsResult};
