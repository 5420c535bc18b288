//! Centralized navigation options with TOML preset support.
//!
//! All tweakable settings (look sensitivity, pitch clamp, walking speed,
//! movement keys, proximity probing, projection) are consolidated here.
//! Options serialize to/from TOML presets.

mod camera;
mod keybindings;
mod navigation;
mod proximity;

use std::path::Path;

pub use camera::CameraOptions;
use glam::{Vec2, Vec3};
pub use keybindings::MovementKeyOptions;
pub use navigation::{CompositionOrder, NavigationOptions, RotationConvention};
pub use proximity::ProximityOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{MovementKeys, NavigatorConfig};
use crate::error::NavError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[navigation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Look and walk parameters.
    pub navigation: NavigationOptions,
    /// Movement key bindings.
    #[schemars(skip)]
    pub movement_keys: MovementKeyOptions,
    /// View-ray proximity parameters.
    pub proximity: ProximityOptions,
    /// Camera projection parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`NavError::Io`] if the file cannot be read, [`NavError::OptionsParse`]
    /// if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`NavError::OptionsParse`] if `content` is not valid options TOML.
    pub fn from_toml(content: &str) -> Result<Self, NavError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        options.movement_keys.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`NavError::OptionsParse`] on serialization failure, [`NavError::Io`]
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(NavError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Build a validated navigator configuration for a viewport.
    ///
    /// # Errors
    ///
    /// Any error from [`NavigatorConfig::validate`].
    pub fn navigator_config(
        &self,
        viewport: Vec2,
    ) -> Result<NavigatorConfig, NavError> {
        let nav = &self.navigation;
        let config = NavigatorConfig {
            yaw_sensitivity: nav.yaw_sensitivity,
            pitch_sensitivity: nav.pitch_sensitivity,
            pitch_min: -nav.pitch_limit,
            pitch_max: nav.pitch_limit,
            move_speed: nav.move_speed,
            keys: MovementKeys::from_options(&self.movement_keys),
            viewport,
            convention: nav.convention,
        };
        config.validate()?;
        Ok(config)
    }

    /// Initial camera position.
    #[must_use]
    pub fn start_position(&self) -> Vec3 {
        Vec3::from_array(self.navigation.start_position)
    }
}
