//! Light/dark theme resolution, application and persistence.
//!
//! Resolution order on load: stored preference, then the OS dark-mode media
//! query, then light. Applying a theme flips the root class, writes the
//! preference back, and moves the selected ring between the light and dark
//! controls (desktop and mobile copies alike).
//!
//! TRADE-OFFS
//! ==========
//! Initialization persists the resolved theme, so OS changes only take
//! effect while the stored key is absent or empty.

use std::fmt;

use crate::config::ThemeConfig;
use crate::view::{ClassTarget, PreferenceStore};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value. Anything but `"dark"` means light.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the theme to apply on page load.
#[must_use]
pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored {
        Some(value) if !value.is_empty() => Theme::from_stored(value),
        _ => Theme::from_dark(prefers_dark),
    }
}

/// `#a, #b` selector for the control ids. Matches every element sharing an
/// id, so desktop and mobile copies are all found.
#[must_use]
pub fn control_selector(ids: &[String]) -> String {
    ids.iter().map(|id| format!("#{id}")).collect::<Vec<_>>().join(", ")
}

/// Owns the theme state of one document.
pub struct ThemeController<S, E> {
    store: S,
    root: E,
    light_controls: Vec<E>,
    dark_controls: Vec<E>,
    config: ThemeConfig,
}

impl<S: PreferenceStore, E: ClassTarget> ThemeController<S, E> {
    pub fn new(store: S, root: E, light_controls: Vec<E>, dark_controls: Vec<E>, config: ThemeConfig) -> Self {
        Self { store, root, light_controls, dark_controls, config }
    }

    /// Resolve and apply the initial theme.
    pub fn initialize(&self, prefers_dark: bool) -> Theme {
        let stored = self.store.get(&self.config.storage_key);
        let theme = resolve(stored.as_deref(), prefers_dark);
        log::debug!("theme: stored={stored:?} prefers_dark={prefers_dark} -> {theme}");
        self.apply(theme);
        theme
    }

    /// Apply `theme` to the root, persist it, and update every control.
    pub fn apply(&self, theme: Theme) {
        match theme {
            Theme::Dark => self.root.add_class(&self.config.root_class),
            Theme::Light => self.root.remove_class(&self.config.root_class),
        }
        self.store.set(&self.config.storage_key, theme.as_str());
        self.update_controls(theme);
    }

    /// React to the OS preference flipping. Ignored while a preference is stored.
    pub fn on_system_change(&self, prefers_dark: bool) -> Option<Theme> {
        if self.has_stored_preference() {
            return None;
        }
        let theme = Theme::from_dark(prefers_dark);
        log::debug!("theme: following system preference -> {theme}");
        self.apply(theme);
        Some(theme)
    }

    /// Theme currently shown by the root marker class.
    pub fn current(&self) -> Theme {
        Theme::from_dark(self.root.has_class(&self.config.root_class))
    }

    pub fn has_stored_preference(&self) -> bool {
        self.store
            .get(&self.config.storage_key)
            .is_some_and(|value| !value.is_empty())
    }

    fn update_controls(&self, theme: Theme) {
        let (light_on, dark_on) = match theme {
            Theme::Light => (true, false),
            Theme::Dark => (false, true),
        };
        set_classes(&self.light_controls, &self.config.light_selected_classes, light_on);
        set_classes(&self.dark_controls, &self.config.dark_selected_classes, dark_on);
    }
}

fn set_classes<E: ClassTarget>(controls: &[E], classes: &[String], on: bool) {
    for control in controls {
        for class in classes {
            if on {
                control.add_class(class);
            } else {
                control.remove_class(class);
            }
        }
    }
}
