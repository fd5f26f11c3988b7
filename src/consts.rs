//! Default DOM contract and timing constants for the shipped markup.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query reporting the OS dark-mode preference.
pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class placed on `<html>` while the dark theme is active.
pub const DARK_ROOT_CLASS: &str = "dark";

pub const LIGHT_CONTROL_IDS: &[&str] = &["light-mode-btn", "light-mode-btn-mobile"];
pub const DARK_CONTROL_IDS: &[&str] = &["dark-mode-btn", "dark-mode-btn-mobile"];

/// Ring classes marking the selected light control.
pub const LIGHT_SELECTED_CLASSES: &[&str] = &["ring-2", "ring-yellow-400"];

/// Ring classes marking the selected dark control.
pub const DARK_SELECTED_CLASSES: &[&str] = &["ring-2", "ring-gray-400"];

// ── Navigation ──────────────────────────────────────────────────

pub const MENU_BUTTON_PREFIX: &str = "mobile-menu-button";
pub const MENU_PANEL_PREFIX: &str = "mobile-menu";
pub const HIDDEN_CLASS: &str = "hidden";

pub const NAV_LINK_SELECTOR: &str = "nav a";
pub const ACTIVE_CLASS: &str = "active";

// ── Press animation ─────────────────────────────────────────────

/// Substring of element ids that receive the press animation.
pub const PRESS_ID_MARKER: &str = "mode-btn";

pub const PRESSED_TRANSFORM: &str = "scale(0.95)";
pub const RELEASED_TRANSFORM: &str = "scale(1)";

/// Delay before a pressed button springs back.
pub const PRESS_RESTORE_MS: u32 = 150;

// ── Contact form ────────────────────────────────────────────────

pub const NAME_FIELD_ID: &str = "nombre";
pub const EMAIL_FIELD_ID: &str = "email";
pub const SUBJECT_FIELD_ID: &str = "asunto";
pub const MESSAGE_FIELD_ID: &str = "mensaje";
pub const FEEDBACK_ID: &str = "mensaje-formulario";

/// Border color of an invalid field (Tailwind red-500).
pub const ERROR_BORDER_COLOR: &str = "#ef4444";

pub const ERROR_FEEDBACK_CLASS: &str = "mb-5 text-center text-base font-semibold text-red-500";
pub const SUCCESS_FEEDBACK_CLASS: &str = "mb-5 text-center text-base font-semibold text-green-600";
