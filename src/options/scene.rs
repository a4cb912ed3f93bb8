use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Appearance of the rendered box and its lights.
pub struct SceneOptions {
    /// Edge length of the box.
    #[schemars(title = "Box Size", range(min = 0.5, max = 4.0), extend("step" = 0.1))]
    pub box_size: f32,
    /// Linear RGB base color of the box.
    #[schemars(skip)]
    pub box_color: [f32; 3],
    /// Linear RGB clear color behind the box.
    #[schemars(skip)]
    pub background: [f32; 3],
    /// Uniform ambient light.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ambient: f32,
    /// Position of the key light (treated as a direction toward origin).
    #[schemars(skip)]
    pub key_light_dir: [f32; 3],
    /// Key light intensity.
    #[schemars(title = "Key Light", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub key_light_intensity: f32,
    /// Position of the fill light.
    #[schemars(skip)]
    pub fill_light_dir: [f32; 3],
    /// Fill light intensity.
    #[schemars(title = "Fill Light", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub fill_light_intensity: f32,
    /// Position of the tinted top light.
    #[schemars(skip)]
    pub top_light_dir: [f32; 3],
    /// Top light intensity.
    #[schemars(title = "Top Light", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub top_light_intensity: f32,
    /// Linear RGB tint of the top light.
    #[schemars(skip)]
    pub top_light_color: [f32; 3],
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            box_size: 2.0,
            // #1a237e
            box_color: [0.010, 0.017, 0.209],
            // between #667eea and #764ba2
            background: [0.156, 0.127, 0.565],
            ambient: 0.3,
            key_light_dir: [5.0, 5.0, 5.0],
            key_light_intensity: 1.5,
            fill_light_dir: [-3.0, -3.0, -3.0],
            fill_light_intensity: 0.5,
            top_light_dir: [0.0, 10.0, 0.0],
            top_light_intensity: 0.8,
            // #a78bfa
            top_light_color: [0.386, 0.258, 0.955],
        }
    }
}
