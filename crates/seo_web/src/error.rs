//! Browser-side error types.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while touching the DOM.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeoWebError {
    #[error("No global window")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Document has no head")]
    NoHead,

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SeoWebError {
    fn from(value: JsValue) -> Self {
        SeoWebError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<SeoWebError> for JsValue {
    fn from(err: SeoWebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
