//! Browser bindings: web-sys implementations of the view seams plus the
//! event wiring for every enhancer.
//!
//! SYSTEM CONTEXT
//! ==============
//! All handlers run on the main thread and live for the lifetime of the
//! page, so closures are leaked with `Closure::forget` once registered.
//! Shared state between handlers is held in `Rc`.
//!
//! ERROR HANDLING
//! ==============
//! Each enhancer is wired independently. A failure in one is logged and the
//! others still run. Missing optional elements are not errors.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlAnchorElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, MediaQueryListEvent, Storage, Window,
};

use crate::config::{FormConfig, NavConfig, PressConfig, SiteConfig, ThemeConfig};
use crate::error::SiteError;
use crate::form::{self, ContactForm, Feedback, Field, FormView};
use crate::menu;
use crate::nav;
use crate::press::{self, PressAnimator};
use crate::theme::{self, Theme, ThemeController};
use crate::view::{ClassTarget, LinkTarget, MemoryStore, PreferenceStore, Scheduler, StyleTarget};

// =============================================================================
// VIEW IMPLEMENTATIONS
// =============================================================================

fn warn_on_err<T>(what: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

macro_rules! impl_class_target {
    ($($ty:ty),*) => {$(
        impl ClassTarget for $ty {
            fn has_class(&self, class: &str) -> bool {
                self.class_list().contains(class)
            }

            fn add_class(&self, class: &str) {
                warn_on_err("classList.add", self.class_list().add_1(class));
            }

            fn remove_class(&self, class: &str) {
                warn_on_err("classList.remove", self.class_list().remove_1(class));
            }

            fn toggle_class(&self, class: &str) {
                warn_on_err("classList.toggle", self.class_list().toggle(class));
            }
        }
    )*};
}

impl_class_target!(Element, HtmlElement, HtmlAnchorElement);

impl StyleTarget for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        if value.is_empty() {
            warn_on_err("style.removeProperty", self.style().remove_property(property));
        } else {
            warn_on_err("style.setProperty", self.style().set_property(property, value));
        }
    }
}

impl LinkTarget for HtmlAnchorElement {
    fn target_url(&self) -> String {
        self.href()
    }
}

/// `localStorage`-backed preference store.
pub struct LocalStore(Storage);

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.0.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage.getItem({key}) failed: {err:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        warn_on_err("localStorage.setItem", self.0.set_item(key, value));
    }
}

/// `localStorage` when usable, otherwise an in-memory store for this page.
fn preference_store(window: &Window) -> Box<dyn PreferenceStore> {
    match window.local_storage() {
        Ok(Some(storage)) => Box::new(LocalStore(storage)),
        Ok(None) => {
            log::warn!("theme: localStorage unavailable, preference will not persist");
            Box::new(MemoryStore::new())
        }
        Err(err) => {
            log::warn!("theme: localStorage blocked ({err:?}), preference will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

/// `setTimeout`-backed scheduler. Timers cannot be cancelled.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// The contact form and its tracked elements.
pub struct DomContactForm {
    form: HtmlFormElement,
    fields: [HtmlElement; 4],
    feedback: Element,
}

impl DomContactForm {
    /// Locate the tracked elements. `None` if any of them is missing.
    fn locate(document: &Document, form: HtmlFormElement, config: &FormConfig) -> Option<Self> {
        let found = Field::ALL.map(|field| html_element_by_id(document, field.element_id(config)));
        let Some(feedback) = document.get_element_by_id(&config.feedback_id) else {
            log::warn!("form: #{} missing, validator not wired", config.feedback_id);
            return None;
        };
        let Some(fields) = form::all_fields(found) else {
            log::warn!("form: tracked field missing, validator not wired");
            return None;
        };
        Some(Self { form, fields, feedback })
    }

    fn field(&self, field: Field) -> &HtmlElement {
        match field {
            Field::Name => &self.fields[0],
            Field::Email => &self.fields[1],
            Field::Subject => &self.fields[2],
            Field::Message => &self.fields[3],
        }
    }
}

impl FormView for DomContactForm {
    fn value(&self, field: Field) -> String {
        let el = self.field(field);
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            el.inner_text()
        }
    }

    fn set_border(&self, field: Field, color: &str) {
        self.field(field).set_style("border-color", color);
    }

    fn show_feedback(&self, feedback: &Feedback) {
        match feedback {
            Feedback::Error { text, class } => {
                self.feedback.set_text_content(Some(text.as_str()));
                self.feedback.set_class_name(class);
            }
            Feedback::Success { html, class } => {
                self.feedback.set_inner_html(html);
                self.feedback.set_class_name(class);
            }
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}

// =============================================================================
// QUERIES
// =============================================================================

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// Narrow elements to a concrete subtype, dropping the rest.
fn narrow<T: JsCast + Clone>(elements: Vec<Element>) -> Vec<T> {
    elements.iter().filter_map(|el| el.dyn_ref::<T>().cloned()).collect()
}

fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
}

fn on_event(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<(), SiteError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn on_click(target: &EventTarget, mut handler: impl FnMut() + 'static) -> Result<(), SiteError> {
    on_event(target, "click", move |_: Event| handler())
}

// =============================================================================
// WIRING
// =============================================================================

/// Wire every enhancer onto the current document.
///
/// # Errors
///
/// Fails only when there is no window or document. Per-enhancer failures are
/// logged and skipped.
pub fn enhance(config: &SiteConfig) -> Result<(), SiteError> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let document = window.document().ok_or(SiteError::NoDocument)?;

    report("theme", bind_theme(&window, &document, &config.theme));
    report("menu", bind_menus(&document, &config.nav));
    report("nav", highlight_current_page(&window, &document, &config.nav));
    report("press", bind_press(&document, &config.press));
    report("form", bind_contact_form(&document, &config.form));
    Ok(())
}

fn report(name: &str, result: Result<(), SiteError>) {
    if let Err(err) = result {
        log::warn!("{name}: skipped: {err}");
    }
}

fn bind_theme(window: &Window, document: &Document, config: &ThemeConfig) -> Result<(), SiteError> {
    let root = document.document_element().ok_or(SiteError::NoDocument)?;
    let light = query_all(document, &theme::control_selector(&config.light_control_ids))?;
    let dark = query_all(document, &theme::control_selector(&config.dark_control_ids))?;
    let media = window.match_media(&config.media_query)?;
    let prefers_dark = media.as_ref().is_some_and(web_sys::MediaQueryList::matches);

    let controller = Rc::new(ThemeController::new(
        preference_store(window),
        root,
        light.clone(),
        dark.clone(),
        config.clone(),
    ));
    let applied = controller.initialize(prefers_dark);
    log::info!("theme: applied {applied} ({} light, {} dark controls)", light.len(), dark.len());

    for (controls, theme) in [(&light, Theme::Light), (&dark, Theme::Dark)] {
        for el in controls {
            let controller = Rc::clone(&controller);
            on_click(el, move || controller.apply(theme))?;
        }
    }

    if let Some(media) = media {
        let controller = Rc::clone(&controller);
        let list = media.clone();
        on_event(&media, "change", move |event: Event| {
            let prefers_dark = event
                .dyn_ref::<MediaQueryListEvent>()
                .map_or_else(|| list.matches(), MediaQueryListEvent::matches);
            if controller.on_system_change(prefers_dark).is_none() {
                log::debug!("theme: system change ignored, preference stored");
            }
        })?;
    }
    Ok(())
}

fn bind_menus(document: &Document, config: &NavConfig) -> Result<(), SiteError> {
    let buttons = query_all(document, &menu::button_selector(config))?
        .into_iter()
        .map(|el| (el.id(), el))
        .collect();
    let pairs = menu::pair(buttons, config, |id| document.get_element_by_id(id));
    log::info!("menu: {} toggle(s) bound", pairs.len());
    for (button, toggle) in pairs {
        on_click(&button, move || toggle.toggle())?;
    }
    Ok(())
}

fn highlight_current_page(window: &Window, document: &Document, config: &NavConfig) -> Result<(), SiteError> {
    let path = window.location().pathname()?;
    let links: Vec<HtmlAnchorElement> = narrow(query_all(document, &config.link_selector)?);
    let active = nav::highlight(&links, &path, &config.active_class);
    log::debug!("nav: {path} -> active links {active:?}");
    Ok(())
}

fn bind_press(document: &Document, config: &PressConfig) -> Result<(), SiteError> {
    let targets: Vec<HtmlElement> = narrow(query_all(document, &press::target_selector(config))?);
    let animator = Rc::new(PressAnimator::new(TimeoutScheduler, config.clone()));
    for el in targets {
        if !press::is_press_target(&el.id(), config) {
            continue;
        }
        let animator = Rc::clone(&animator);
        let target = el.clone();
        on_click(&el, move || animator.press(&target))?;
    }
    Ok(())
}

fn bind_contact_form(document: &Document, config: &FormConfig) -> Result<(), SiteError> {
    let Some(form) = document.query_selector("form")? else {
        return Ok(());
    };
    let Some(form) = form.dyn_ref::<HtmlFormElement>().cloned() else {
        return Ok(());
    };
    let Some(view) = DomContactForm::locate(document, form.clone(), config) else {
        return Ok(());
    };
    let validator = ContactForm::new(config.clone());
    on_event(&form, "submit", move |event: Event| {
        event.prevent_default();
        validator.submit(&view);
    })?;
    log::info!("form: contact validator bound");
    Ok(())
}
