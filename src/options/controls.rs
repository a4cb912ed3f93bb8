use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::smoothing;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Input sensitivity, smoothing, and zoom range for the orientation
/// controller.
pub struct ControlOptions {
    /// Radians of rotation per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Zoom distance per pixel of wheel scroll.
    #[schemars(title = "Wheel Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub wheel_speed: f32,
    /// Zoom distance per pixel of pinch distance change.
    #[schemars(title = "Pinch Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub pinch_speed: f32,
    /// Fraction of the remaining rotation gap closed each frame.
    #[schemars(title = "Rotation Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub rotation_smoothing: f32,
    /// Fraction of the remaining zoom gap closed each frame.
    #[schemars(title = "Zoom Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub zoom_smoothing: f32,
    /// Closest allowed camera distance.
    #[schemars(title = "Min Distance", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub zoom_min: f32,
    /// Farthest allowed camera distance.
    #[schemars(title = "Max Distance", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub zoom_max: f32,
    /// Camera distance at startup and after a view reset.
    #[schemars(skip)]
    pub initial_zoom: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.01,
            wheel_speed: 0.01,
            pinch_speed: 0.02,
            rotation_smoothing: 0.15,
            zoom_smoothing: 0.1,
            zoom_min: 3.0,
            zoom_max: 15.0,
            initial_zoom: 5.0,
        }
    }
}

impl ControlOptions {
    /// Check that these options describe a usable controller.
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        let speeds = [
            ("rotate_speed", self.rotate_speed),
            ("wheel_speed", self.wheel_speed),
            ("pinch_speed", self.pinch_speed),
        ];
        for (name, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "{name} must be finite and non-negative, got {value}"
                ));
            }
        }
        for (name, value) in [
            ("rotation_smoothing", self.rotation_smoothing),
            ("zoom_smoothing", self.zoom_smoothing),
        ] {
            if !smoothing::is_valid_factor(value) {
                return Err(format!("{name} must be in (0, 1], got {value}"));
            }
        }
        if !self.zoom_min.is_finite()
            || !self.zoom_max.is_finite()
            || self.zoom_min > self.zoom_max
        {
            return Err(format!(
                "zoom range [{}, {}] is empty or not finite",
                self.zoom_min, self.zoom_max
            ));
        }
        // The camera looks at the origin from +Z; a non-positive distance
        // puts the eye on or behind the target.
        if self.zoom_min <= 0.0 {
            return Err(format!(
                "zoom_min must be positive, got {}",
                self.zoom_min
            ));
        }
        if !self.initial_zoom.is_finite() {
            return Err(format!(
                "initial_zoom must be finite, got {}",
                self.initial_zoom
            ));
        }
        Ok(())
    }

    /// Clamp a zoom distance into `[zoom_min, zoom_max]`.
    #[must_use]
    pub fn clamp_zoom(&self, distance: f32) -> f32 {
        distance.clamp(self.zoom_min, self.zoom_max)
    }
}
