//! Centralized controller/display options with TOML preset support.
//!
//! All tweakable settings (input sensitivity, smoothing, zoom range, camera
//! projection, scene appearance, keybindings) are consolidated here.
//! Options serialize to/from TOML so a viewer can be launched with a
//! preset file.

mod camera;
mod controls;
mod keybindings;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use keybindings::KeybindingOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TumbleError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Input sensitivity, smoothing, and zoom range.
    pub controls: ControlOptions,
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Box and lighting appearance.
    pub scene: SceneOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The JSON Schema as a pretty-printed string, for host UIs that build
    /// settings forms from it.
    pub fn schema_json() -> Result<String, TumbleError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| TumbleError::OptionsParse(e.to_string()))
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, TumbleError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| TumbleError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TumbleError> {
        let content = std::fs::read_to_string(path).map_err(TumbleError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TumbleError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TumbleError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TumbleError::Io)?;
        }
        std::fs::write(path, content).map_err(TumbleError::Io)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }

    /// Reject options the controller or camera cannot work with.
    pub fn validate(&self) -> Result<(), TumbleError> {
        self.controls.validate().map_err(TumbleError::InvalidOptions)?;
        let cam = &self.camera;
        if !(cam.znear > 0.0 && cam.zfar > cam.znear) {
            return Err(TumbleError::InvalidOptions(format!(
                "clip planes must satisfy 0 < znear < zfar, got {} / {}",
                cam.znear, cam.zfar
            )));
        }
        if self.controls.zoom_min <= cam.znear {
            return Err(TumbleError::InvalidOptions(format!(
                "zoom_min {} must lie beyond the near clip plane {}",
                self.controls.zoom_min, cam.znear
            )));
        }
        Ok(())
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
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controls]
zoom_max = 20.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.controls.zoom_max, 20.0);
        // Everything else should be default
        assert_eq!(opts.controls.zoom_min, 3.0);
        assert_eq!(opts.controls.rotation_smoothing, 0.15);
        assert_eq!(opts.camera.fovy, 50.0);
    }

    #[test]
    fn default_controls_match_reference_constants() {
        let controls = ControlOptions::default();
        assert_eq!(controls.rotate_speed, 0.01);
        assert_eq!(controls.wheel_speed, 0.01);
        assert_eq!(controls.pinch_speed, 0.02);
        assert_eq!(controls.zoom_smoothing, 0.1);
        assert!(controls.validate().is_ok());
    }

    #[test]
    fn inverted_zoom_range_is_rejected() {
        let toml_str = r"
[controls]
zoom_min = 10.0
zoom_max = 4.0
";
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, TumbleError::InvalidOptions(_)));
    }

    #[test]
    fn non_positive_zoom_range_is_rejected() {
        let toml_str = r"
[controls]
zoom_min = 0.0
zoom_max = 0.0
initial_zoom = 0.0
";
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, TumbleError::InvalidOptions(_)));

        let mut opts = Options::default();
        opts.controls.zoom_min = -10.0;
        opts.controls.zoom_max = -2.0;
        assert!(opts.validate().is_err());
        assert!(opts.controls.validate().is_err());
    }

    #[test]
    fn zoom_inside_near_plane_is_rejected() {
        let mut opts = Options::default();
        opts.controls.zoom_min = 0.05;
        assert!(opts.controls.validate().is_ok());
        assert!(matches!(
            opts.validate(),
            Err(TumbleError::InvalidOptions(_))
        ));

        opts.camera.znear = 0.01;
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn smoothing_outside_unit_interval_is_rejected() {
        let mut opts = Options::default();
        opts.controls.rotation_smoothing = 1.5;
        assert!(opts.validate().is_err());
        opts.controls.rotation_smoothing = 0.0;
        assert!(opts.validate().is_err());
        opts.controls.rotation_smoothing = 1.0;
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn bad_clip_planes_are_rejected() {
        let mut opts = Options::default();
        opts.camera.zfar = opts.camera.znear;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[controls\nzoom_min = ").unwrap_err();
        assert!(matches!(err, TumbleError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyR"),
            Some(KeyAction::ResetView)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn save_then_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("tumble-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.controls.initial_zoom = 8.0;
        opts.save(&dir.join("close_up.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("close_up.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["close_up".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err =
            Options::load(Path::new("/nonexistent/tumble.toml")).unwrap_err();
        assert!(matches!(err, TumbleError::Io(_)));
    }

    #[test]
    fn schema_json_parses_back_with_titles() {
        let text = Options::schema_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let controls = &value["properties"]["controls"];
        assert_eq!(
            controls["properties"]["rotate_speed"]["title"],
            "Rotate Speed"
        );
        assert_eq!(controls["properties"]["zoom_max"]["maximum"], 50.0);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("controls"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("scene"));
        assert!(!props.contains_key("keybindings"));

        let controls = &props["controls"]["properties"];
        assert!(controls.get("rotate_speed").is_some());
        assert!(controls.get("zoom_min").is_some());
        assert!(controls.get("initial_zoom").is_none());
    }
}
