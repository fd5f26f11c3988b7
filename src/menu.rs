//! Mobile navigation menus.
//!
//! A page may carry several menus. Each toggle button's id is the button
//! prefix plus a suffix, and its panel's id is the panel prefix plus the same
//! suffix: `mobile-menu-button-footer` drives `mobile-menu-footer`.

use crate::config::NavConfig;
use crate::view::ClassTarget;

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Selector matching every toggle button.
#[must_use]
pub fn button_selector(config: &NavConfig) -> String {
    format!("[id^=\"{}\"]", config.menu_button_prefix)
}

/// Suffix of a toggle button id, or `None` if it lacks the button prefix.
#[must_use]
pub fn button_suffix<'a>(button_id: &'a str, config: &NavConfig) -> Option<&'a str> {
    button_id.strip_prefix(config.menu_button_prefix.as_str())
}

/// Panel id paired with a toggle button id.
#[must_use]
pub fn panel_id(button_id: &str, config: &NavConfig) -> Option<String> {
    button_suffix(button_id, config).map(|suffix| format!("{}{suffix}", config.menu_panel_prefix))
}

/// Toggles the visibility of one panel.
pub struct MenuToggle<P> {
    panel: P,
    hidden_class: String,
}

impl<P: ClassTarget> MenuToggle<P> {
    pub fn new(panel: P, hidden_class: &str) -> Self {
        Self { panel, hidden_class: hidden_class.to_owned() }
    }

    pub fn toggle(&self) {
        self.panel.toggle_class(&self.hidden_class);
    }

    pub fn is_open(&self) -> bool {
        !self.panel.has_class(&self.hidden_class)
    }
}

/// Pair each `(id, button)` with its panel.
///
/// Buttons whose panel `find_panel` cannot locate are dropped and stay
/// unbound.
pub fn pair<B, P>(
    buttons: Vec<(String, B)>,
    config: &NavConfig,
    mut find_panel: impl FnMut(&str) -> Option<P>,
) -> Vec<(B, MenuToggle<P>)>
where
    P: ClassTarget,
{
    let mut pairs = Vec::with_capacity(buttons.len());
    for (id, button) in buttons {
        let Some(target) = panel_id(&id, config) else {
            continue;
        };
        match find_panel(&target) {
            Some(panel) => pairs.push((button, MenuToggle::new(panel, &config.hidden_class))),
            None => log::debug!("menu: no panel #{target} for button #{id}"),
        }
    }
    pairs
}
