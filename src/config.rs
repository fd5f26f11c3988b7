//! Page wiring configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every id, class name and timing the enhancer touches lives here so a page
//! with different markup can pass a JSON override to `enhance_with_config`.
//! Missing keys fall back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::SiteError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Theme controller settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub media_query: String,
    pub root_class: String,
    pub light_control_ids: Vec<String>,
    pub dark_control_ids: Vec<String>,
    pub light_selected_classes: Vec<String>,
    pub dark_selected_classes: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            media_query: consts::DARK_MEDIA_QUERY.to_owned(),
            root_class: consts::DARK_ROOT_CLASS.to_owned(),
            light_control_ids: owned(consts::LIGHT_CONTROL_IDS),
            dark_control_ids: owned(consts::DARK_CONTROL_IDS),
            light_selected_classes: owned(consts::LIGHT_SELECTED_CLASSES),
            dark_selected_classes: owned(consts::DARK_SELECTED_CLASSES),
        }
    }
}

/// Mobile menu and navigation highlight settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub menu_button_prefix: String,
    pub menu_panel_prefix: String,
    pub hidden_class: String,
    pub link_selector: String,
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            menu_button_prefix: consts::MENU_BUTTON_PREFIX.to_owned(),
            menu_panel_prefix: consts::MENU_PANEL_PREFIX.to_owned(),
            hidden_class: consts::HIDDEN_CLASS.to_owned(),
            link_selector: consts::NAV_LINK_SELECTOR.to_owned(),
            active_class: consts::ACTIVE_CLASS.to_owned(),
        }
    }
}

/// Button press animation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressConfig {
    pub id_marker: String,
    pub pressed_transform: String,
    pub released_transform: String,
    pub restore_ms: u32,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            id_marker: consts::PRESS_ID_MARKER.to_owned(),
            pressed_transform: consts::PRESSED_TRANSFORM.to_owned(),
            released_transform: consts::RELEASED_TRANSFORM.to_owned(),
            restore_ms: consts::PRESS_RESTORE_MS,
        }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub name_id: String,
    pub email_id: String,
    pub subject_id: String,
    pub message_id: String,
    pub feedback_id: String,
    pub error_border_color: String,
    pub error_class: String,
    pub success_class: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name_id: consts::NAME_FIELD_ID.to_owned(),
            email_id: consts::EMAIL_FIELD_ID.to_owned(),
            subject_id: consts::SUBJECT_FIELD_ID.to_owned(),
            message_id: consts::MESSAGE_FIELD_ID.to_owned(),
            feedback_id: consts::FEEDBACK_ID.to_owned(),
            error_border_color: consts::ERROR_BORDER_COLOR.to_owned(),
            error_class: consts::ERROR_FEEDBACK_CLASS.to_owned(),
            success_class: consts::SUCCESS_FEEDBACK_CLASS.to_owned(),
        }
    }
}

/// Top-level configuration for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub press: PressConfig,
    pub form: FormConfig,
}

impl SiteConfig {
    /// Parse a JSON override. Absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] when the input is not valid JSON or a
    /// present key has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}
