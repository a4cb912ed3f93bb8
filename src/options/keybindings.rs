use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// A preset only needs to list the bindings it changes; the rest keep their
/// defaults. A key claimed by a listed binding is taken away from the
/// default that held it, and an empty key string unbinds the action.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ResetView` → `"KeyR"`).
    #[serde(deserialize_with = "merge_over_defaults")]
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::ResetView, "KeyR".into()),
            (KeyAction::Quit, "Escape".into()),
            (KeyAction::ReloadOptions, "F5".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }
}

fn merge_over_defaults<'de, D>(
    deserializer: D,
) -> Result<HashMap<KeyAction, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = HashMap::<KeyAction, String>::deserialize(deserializer)?;
    let mut bindings = KeybindingOptions::default().bindings;
    bindings.retain(|_, key| !overrides.values().any(|taken| taken == key));
    bindings.extend(overrides);
    bindings.retain(|_, key| !key.is_empty());
    Ok(bindings)
}
