use serde::{Deserialize, Serialize};

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// reset_view = "KeyR"
/// quit = "Escape"
/// reload_options = "F5"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Ease rotation and zoom back to their initial values.
    ResetView,
    /// Close the viewer.
    Quit,
    /// Re-read the preset file the viewer was started with.
    ReloadOptions,
}
