//! Seams between page logic and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Enhancers are written against these traits instead of `web_sys` types so
//! they run in native unit tests with in-memory doubles. The `dom` module
//! implements them for real elements, `localStorage` and `setTimeout`.

use std::cell::RefCell;
use std::collections::HashMap;

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// String key/value storage for persisted preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// Anything carrying a class list.
pub trait ClassTarget {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    fn toggle_class(&self, class: &str) {
        if self.has_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }
}

/// Anything carrying an inline style declaration.
pub trait StyleTarget {
    /// Set an inline style property. An empty value clears it.
    fn set_style(&self, property: &str, value: &str);
}

/// A navigation anchor.
pub trait LinkTarget: ClassTarget {
    /// Fully resolved target URL of the link.
    fn target_url(&self) -> String;
}

/// Deferred execution on the UI thread.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Process-local [`PreferenceStore`].
///
/// Used by tests and as the fallback when `localStorage` is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}
