//! In-memory view doubles shared by unit tests.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::view::{ClassTarget, LinkTarget, Scheduler, StyleTarget};

#[derive(Debug, Default)]
struct FakeState {
    id: String,
    href: String,
    classes: BTreeSet<String>,
    styles: HashMap<String, String>,
}

/// Shared-handle element: clones observe the same state, like DOM refs.
#[derive(Debug, Clone, Default)]
pub struct FakeElement(Rc<RefCell<FakeState>>);

impl FakeElement {
    pub fn new(id: &str) -> Self {
        let el = Self::default();
        el.0.borrow_mut().id = id.to_owned();
        el
    }

    pub fn link(href: &str) -> Self {
        let el = Self::default();
        el.0.borrow_mut().href = href.to_owned();
        el
    }

    pub fn id(&self) -> String {
        self.0.borrow().id.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.iter().cloned().collect()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }
}

impl ClassTarget for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_owned());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }
}

impl StyleTarget for FakeElement {
    fn set_style(&self, property: &str, value: &str) {
        let mut state = self.0.borrow_mut();
        if value.is_empty() {
            state.styles.remove(property);
        } else {
            state.styles.insert(property.to_owned(), value.to_owned());
        }
    }
}

impl LinkTarget for FakeElement {
    fn target_url(&self) -> String {
        self.0.borrow().href.clone()
    }
}

type Task = (u32, Box<dyn FnOnce()>);

/// Scheduler that queues tasks until the test fires them.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    pending: Rc<RefCell<Vec<Task>>>,
}

impl ManualScheduler {
    pub fn pending_delays(&self) -> Vec<u32> {
        self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Run every queued task in scheduling order.
    pub fn fire_all(&self) {
        let tasks: Vec<Task> = self.pending.borrow_mut().drain(..).collect();
        for (_, task) in tasks {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push((delay_ms, task));
    }
}
