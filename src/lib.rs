//! # pagekit
//!
//! Client-side enhancements for a static multi-page site, compiled to
//! WebAssembly. Each page loads the module and calls `enhance()` once the
//! DOM is ready.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark resolution, persistence and control rings |
//! | [`menu`] | Mobile menu button/panel pairing and toggling |
//! | [`nav`] | Active navigation link highlighting |
//! | [`press`] | Press animation on the theme buttons |
//! | [`form`] | Contact form validation and simulated submission |
//! | [`view`] | Storage, element and timer seams used by the above |
//! | [`config`] | Serde-backed page configuration |
//! | [`consts`] | Default ids, classes and timings |
//! | [`error`] | Browser boundary errors |
//! | `dom` | web-sys bindings and event wiring (`browser` feature) |
//!
//! Everything except `dom` is browser-independent and unit-tested natively.

pub mod config;
pub mod consts;
pub mod error;
pub mod form;
pub mod menu;
pub mod nav;
pub mod press;
pub mod theme;
pub mod view;

#[cfg(feature = "browser")]
pub mod dom;

#[cfg(test)]
mod testing;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::*;

pub use config::SiteConfig;
pub use error::SiteError;

/// Module start hook: panic hook and console logger.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger already installed: {err}");
    }
}

/// Wire every enhancer with the default configuration.
#[cfg(feature = "browser")]
#[wasm_bindgen]
pub fn enhance() {
    if let Err(err) = dom::enhance(&SiteConfig::default()) {
        log::warn!("enhance: {err}");
    }
}

/// Wire every enhancer with a JSON configuration override.
///
/// # Errors
///
/// Rejects malformed configuration JSON.
#[cfg(feature = "browser")]
#[wasm_bindgen(js_name = enhanceWithConfig)]
pub fn enhance_with_config(json: &str) -> Result<(), JsValue> {
    let config = SiteConfig::from_json(json)?;
    if let Err(err) = dom::enhance(&config) {
        log::warn!("enhance: {err}");
    }
    Ok(())
}
