//! Timing and styling knobs for the page behaviours.
//!
//! Defaults match the stock admin templates. A host server can override any
//! subset by embedding `<script type="application/json" id="ui-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// DOM id of the optional embedded configuration payload.
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

/// How long flash messages stay fully visible before fading.
pub const FLASH_VISIBLE_MS: u32 = 5000;
/// Duration of the flash fade-out transition.
pub const FLASH_FADE_MS: u32 = 500;
/// Default lifetime of a transient notification.
pub const NOTIFICATION_MS: u32 = 3000;
/// Border colour applied to a required field left empty.
pub const INVALID_BORDER: &str = "#dc3545";
/// Border colour applied to a required field that passed validation.
pub const VALID_BORDER: &str = "#e1e1e1";

/// Page behaviour configuration, provided to components through context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub flash_visible_ms: u32,
    pub flash_fade_ms: u32,
    pub notification_ms: u32,
    pub invalid_border: String,
    pub valid_border: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            flash_visible_ms: FLASH_VISIBLE_MS,
            flash_fade_ms: FLASH_FADE_MS,
            notification_ms: NOTIFICATION_MS,
            invalid_border: INVALID_BORDER.to_owned(),
            valid_border: VALID_BORDER.to_owned(),
        }
    }
}

impl UiConfig {
    /// Decode a configuration payload; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Payload`] if `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the embedded configuration, falling back to defaults.
    pub fn load() -> Self {
        crate::util::embedded::read_json(CONFIG_ELEMENT_ID).unwrap_or_default()
    }

    /// Total time a flash message spends on screen, fade included.
    #[must_use]
    pub fn flash_lifetime_ms(&self) -> u32 {
        self.flash_visible_ms.saturating_add(self.flash_fade_ms)
    }
}
