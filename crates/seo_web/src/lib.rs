//! humanbench SEO - page metadata in the browser
//!
//! Keeps the document head in sync with the current route: title,
//! description, Open Graph and Twitter Card tags, the canonical link and a
//! JSON-LD block.
//!
//! ## Usage in JavaScript
//!
//! Initializing the module installs `SEO_CONFIG`, `updateMetaTags` and
//! `updateStructuredData` on `window`, so the host page can call them on
//! navigation without importing anything:
//!
//! ```javascript
//! import init from 'humanbench-seo-web';
//!
//! await init();
//!
//! // On every route change
//! window.updateMetaTags('reactionTime');
//! window.updateStructuredData('reactionTime');
//! ```
//!
//! The same functions are also available as module exports.
//!
//! ## Build
//!
//! ```bash
//! wasm-pack build crates/seo_web --target web --out-dir pkg
//! ```

mod error;
mod head;

pub use error::SeoWebError;
pub use head::WebHead;

use humanbench_core::seo::SEO_CONFIG;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    install_globals()
}

/// Sets `window.SEO_CONFIG`, `window.updateMetaTags` and
/// `window.updateStructuredData`. Calling it again replaces them.
pub fn install_globals() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(SeoWebError::NoWindow)?;

    Reflect::set(&window, &JsValue::from_str("SEO_CONFIG"), &seo_config()?)?;

    let meta_tags = Closure::<dyn Fn(String) -> Result<(), JsValue>>::new(|page_key: String| {
        update_meta_tags(&page_key)
    });
    Reflect::set(&window, &JsValue::from_str("updateMetaTags"), meta_tags.as_ref())?;
    // The window keeps the function for the lifetime of the page.
    meta_tags.forget();

    let structured = Closure::<dyn Fn(String) -> Result<bool, JsValue>>::new(|page_key: String| {
        update_structured_data(&page_key)
    });
    Reflect::set(&window, &JsValue::from_str("updateStructuredData"), structured.as_ref())?;
    structured.forget();

    Ok(())
}

/// The metadata table as a plain object: `{ base, pages: { key: page } }`.
#[wasm_bindgen(js_name = seoConfig)]
pub fn seo_config() -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&SEO_CONFIG.to_json().to_string())
}

/// Writes the title, meta tags and canonical link for `page_key`.
///
/// Unknown keys get the site defaults. Safe to call on every navigation;
/// existing tags are updated in place.
#[wasm_bindgen(js_name = updateMetaTags)]
pub fn update_meta_tags(page_key: &str) -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    let mut head = WebHead::from_window()?;
    humanbench_core::seo::update_meta_tags(&mut head, &SEO_CONFIG, page_key)?;
    Ok(())
}

/// Writes the JSON-LD block for `page_key`.
///
/// Returns `false` without touching the page for unknown keys.
#[wasm_bindgen(js_name = updateStructuredData)]
pub fn update_structured_data(page_key: &str) -> Result<bool, JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    let mut head = WebHead::from_window()?;
    Ok(humanbench_core::seo::update_structured_data(
        &mut head,
        &SEO_CONFIG,
        page_key,
    )?)
}
