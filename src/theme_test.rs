use super::*;
use crate::testing::FakeElement;
use crate::view::MemoryStore;

struct Page {
    root: FakeElement,
    light: Vec<FakeElement>,
    dark: Vec<FakeElement>,
    controller: ThemeController<MemoryStore, FakeElement>,
}

fn page(store: MemoryStore) -> Page {
    let root = FakeElement::new("html");
    let light = vec![FakeElement::new("light-mode-btn"), FakeElement::new("light-mode-btn-mobile")];
    let dark = vec![FakeElement::new("dark-mode-btn"), FakeElement::new("dark-mode-btn-mobile")];
    let controller = ThemeController::new(store, root.clone(), light.clone(), dark.clone(), ThemeConfig::default());
    Page { root, light, dark, controller }
}

fn stored(page: &Page) -> Option<String> {
    page.controller.store.get("theme")
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_prefers_stored_value() {
    assert_eq!(resolve(Some("dark"), false), Theme::Dark);
    assert_eq!(resolve(Some("light"), true), Theme::Light);
}

#[test]
fn resolve_falls_back_to_system_then_light() {
    assert_eq!(resolve(None, true), Theme::Dark);
    assert_eq!(resolve(None, false), Theme::Light);
}

#[test]
fn resolve_treats_empty_stored_value_as_absent() {
    assert_eq!(resolve(Some(""), true), Theme::Dark);
}

#[test]
fn resolve_unknown_stored_value_is_light() {
    assert_eq!(resolve(Some("sepia"), true), Theme::Light);
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_dark_sets_root_class_and_persists() {
    let page = page(MemoryStore::new());
    page.controller.apply(Theme::Dark);
    assert!(page.root.has_class("dark"));
    assert_eq!(stored(&page).as_deref(), Some("dark"));
    assert_eq!(page.controller.current(), Theme::Dark);
}

#[test]
fn apply_light_clears_root_class_and_persists() {
    let page = page(MemoryStore::new());
    page.controller.apply(Theme::Dark);
    page.controller.apply(Theme::Light);
    assert!(!page.root.has_class("dark"));
    assert_eq!(stored(&page).as_deref(), Some("light"));
    assert_eq!(page.controller.current(), Theme::Light);
}

#[test]
fn apply_updates_every_control_copy() {
    let page = page(MemoryStore::new());
    page.controller.apply(Theme::Dark);
    for el in &page.dark {
        assert_eq!(el.classes(), vec!["ring-2", "ring-gray-400"]);
    }
    for el in &page.light {
        assert!(el.classes().is_empty());
    }

    page.controller.apply(Theme::Light);
    for el in &page.light {
        assert_eq!(el.classes(), vec!["ring-2", "ring-yellow-400"]);
    }
    for el in &page.dark {
        assert!(el.classes().is_empty());
    }
}

#[test]
fn apply_sequence_always_matches_last_choice() {
    let page = page(MemoryStore::new());
    for theme in [Theme::Dark, Theme::Dark, Theme::Light, Theme::Dark, Theme::Light, Theme::Light] {
        page.controller.apply(theme);
        assert_eq!(stored(&page).as_deref(), Some(theme.as_str()));
        assert_eq!(page.root.has_class("dark"), theme == Theme::Dark);
    }
}

#[test]
fn apply_without_controls_is_fine() {
    let root = FakeElement::new("html");
    let controller = ThemeController::new(MemoryStore::new(), root.clone(), Vec::new(), Vec::new(), ThemeConfig::default());
    controller.apply(Theme::Dark);
    assert!(root.has_class("dark"));
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_uses_stored_preference_over_system() {
    let page = page(MemoryStore::with_entry("theme", "light"));
    assert_eq!(page.controller.initialize(true), Theme::Light);
    assert!(!page.root.has_class("dark"));
}

#[test]
fn initialize_follows_system_when_nothing_stored() {
    let page = page(MemoryStore::new());
    assert_eq!(page.controller.initialize(true), Theme::Dark);
    assert!(page.root.has_class("dark"));
    assert_eq!(stored(&page).as_deref(), Some("dark"));
}

#[test]
fn initialize_defaults_to_light() {
    let page = page(MemoryStore::new());
    assert_eq!(page.controller.initialize(false), Theme::Light);
    assert_eq!(page.light[0].classes(), vec!["ring-2", "ring-yellow-400"]);
}

#[test]
fn initialize_honours_custom_storage_key() {
    let config = ThemeConfig { storage_key: "site-theme".to_owned(), ..ThemeConfig::default() };
    let root = FakeElement::new("html");
    let store = MemoryStore::with_entry("site-theme", "dark");
    let controller = ThemeController::new(store, root.clone(), Vec::new(), Vec::new(), config);
    assert_eq!(controller.initialize(false), Theme::Dark);
}

// =============================================================
// on_system_change
// =============================================================

#[test]
fn system_change_applies_when_nothing_stored() {
    let page = page(MemoryStore::new());
    assert_eq!(page.controller.on_system_change(true), Some(Theme::Dark));
    assert!(page.root.has_class("dark"));
}

#[test]
fn system_change_applies_when_stored_value_empty() {
    let page = page(MemoryStore::with_entry("theme", ""));
    assert_eq!(page.controller.on_system_change(true), Some(Theme::Dark));
}

#[test]
fn system_change_never_overrides_explicit_choice() {
    let page = page(MemoryStore::new());
    page.controller.apply(Theme::Light);
    assert_eq!(page.controller.on_system_change(true), None);
    assert!(!page.root.has_class("dark"));
    assert_eq!(stored(&page).as_deref(), Some("light"));
}

#[test]
fn current_reads_root_class_not_system() {
    let page = page(MemoryStore::new());
    assert_eq!(page.controller.current(), Theme::Light);
    page.root.add_class("dark");
    assert_eq!(page.controller.current(), Theme::Dark);
    assert_eq!(Theme::from_dark(false), Theme::Light);
}

#[test]
fn control_selector_lists_every_id() {
    let config = ThemeConfig::default();
    assert_eq!(control_selector(&config.light_control_ids), "#light-mode-btn, #light-mode-btn-mobile");
    assert_eq!(control_selector(&config.dark_control_ids), "#dark-mode-btn, #dark-mode-btn-mobile");
    assert_eq!(control_selector(&[]), "");
}

#[test]
fn theme_display_matches_stored_form() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), "light");
}
