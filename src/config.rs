//! Runtime configuration for the modal focus trap.
//!
//! The defaults mirror the markup contract used by the page templates
//! (`class="p-modal"`, `aria-controls="<id>"`, inline `display: flex|none`).
//! Pages with a different convention can pass their own values to
//! `installModalTrap({...})`; missing fields fall back to the defaults.

use serde::Deserialize;

use crate::constants::{
    ATTR_ARIA_CONTROLS, CSS_MODAL, DISPLAY_CLOSED, DISPLAY_OPEN, KEY_CODE_ESCAPE,
    LEGACY_KEY_CODE_ESCAPE,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrapConfig {
    /// Class marker an element must carry to be treated as a dialog.
    pub modal_class: String,
    /// Attribute on a trigger naming the id of the dialog it controls.
    pub controls_attribute: String,
    /// Inline `display` value of an open dialog.
    pub open_display: String,
    /// Inline `display` value of a closed dialog.
    pub closed_display: String,
    /// `KeyboardEvent.code` that closes every dialog.
    pub close_key: String,
    /// Legacy `KeyboardEvent.keyCode` accepted as an alternative.
    pub close_key_code: u32,
}

impl Default for TrapConfig {
    fn default() -> Self {
        Self {
            modal_class: CSS_MODAL.to_string(),
            controls_attribute: ATTR_ARIA_CONTROLS.to_string(),
            open_display: DISPLAY_OPEN.to_string(),
            closed_display: DISPLAY_CLOSED.to_string(),
            close_key: KEY_CODE_ESCAPE.to_string(),
            close_key_code: LEGACY_KEY_CODE_ESCAPE,
        }
    }
}

impl TrapConfig {
    /// Default configuration with a different dialog class marker.
    pub fn with_modal_class(modal_class: &str) -> Self {
        Self {
            modal_class: modal_class.to_string(),
            ..Self::default()
        }
    }

    /// Whether a keydown with the given `code` / legacy `keyCode` should
    /// close all dialogs.
    pub fn is_close_key(&self, code: &str, key_code: u32) -> bool {
        code == self.close_key || key_code == self.close_key_code
    }
}
