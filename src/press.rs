//! Press feedback for the theme buttons.
//!
//! A click shrinks the element and a scheduled task springs it back. Rapid
//! clicks each schedule their own restore and nothing is cancelled, so the
//! last restore to fire wins.

use crate::config::PressConfig;
use crate::view::{Scheduler, StyleTarget};

#[cfg(test)]
#[path = "press_test.rs"]
mod press_test;

/// Whether an element id opts into the press animation.
#[must_use]
pub fn is_press_target(id: &str, config: &PressConfig) -> bool {
    id.contains(config.id_marker.as_str())
}

/// Selector matching every animated element.
#[must_use]
pub fn target_selector(config: &PressConfig) -> String {
    format!("[id*=\"{}\"]", config.id_marker)
}

pub struct PressAnimator<S> {
    scheduler: S,
    config: PressConfig,
}

impl<S: Scheduler> PressAnimator<S> {
    pub fn new(scheduler: S, config: PressConfig) -> Self {
        Self { scheduler, config }
    }

    pub fn press<E>(&self, element: &E)
    where
        E: StyleTarget + Clone + 'static,
    {
        element.set_style("transform", &self.config.pressed_transform);
        let element = element.clone();
        let released = self.config.released_transform.clone();
        self.scheduler.schedule(
            self.config.restore_ms,
            Box::new(move || element.set_style("transform", &released)),
        );
    }
}
