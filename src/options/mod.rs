//! Centralized rendering/display options with TOML preset support.
//!
//! All tweakable settings (display toggles, colors, camera limits, animation
//! timing) are consolidated here. Options serialize to/from TOML for view
//! presets, and export a JSON Schema for the overlay UI's settings panel.

mod animation;
mod camera;
mod colors;
mod display;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use display::{DetailLevel, DisplayOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlasmacyteError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Display toggles and shared opacity behavior.
    pub display: DisplayOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Orbit-distance and zoom parameters.
    pub camera: CameraOptions,
    /// Secretion-cycle and idle-sway timing.
    pub animation: AnimationOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PlasmacyteError> {
        let content =
            std::fs::read_to_string(path).map_err(PlasmacyteError::Io)?;
        toml::from_str(&content)
            .map_err(|e| PlasmacyteError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PlasmacyteError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PlasmacyteError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PlasmacyteError::Io)?;
        }
        std::fs::write(path, content).map_err(PlasmacyteError::Io)
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[animation]
cycle_duration = 12.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.animation.cycle_duration, 12.0);
        // Everything else should be default
        assert_eq!(opts.animation.path_count, 8);
        assert_eq!(opts.display.ghost_opacity, 0.1);
        assert_eq!(opts.display.detail, DetailLevel::High);
    }

    #[test]
    fn pool_sizes_track_path_count() {
        let mut opts = AnimationOptions::default();
        assert_eq!(opts.vesicle_pool(), 16);
        assert_eq!(opts.antibody_pool(), 64);

        opts.path_count = 5;
        assert_eq!(opts.vesicle_pool(), 10);
        assert_eq!(opts.antibody_pool(), 40);
    }

    #[test]
    fn organelle_color_lookup() {
        use crate::organelle::OrganelleId;
        let colors = ColorOptions::default();
        assert_eq!(colors.organelle(OrganelleId::Golgi), colors.golgi);
        assert_eq!(colors.organelle(OrganelleId::Nucleus), colors.nucleus);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("display"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("animation"));

        // Raw palette is not UI-exposed
        assert!(!props.contains_key("colors"));
    }
}
