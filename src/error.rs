//! Errors raised at the browser boundary.
//!
//! The enhancers themselves never fail: missing elements are skipped. These
//! variants cover the environment being unusable (no window, no document), a
//! DOM call rejecting, or a malformed configuration override.

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "browser")]
impl From<SiteError> for wasm_bindgen::JsValue {
    fn from(err: SiteError) -> Self {
        Self::from_str(&err.to_string())
    }
}
