//! Static rendering of page metadata.

use humanbench_core::seo::{
    update_meta_tags, update_structured_data, MemoryHead, SeoConfig, SEO_CONFIG,
};

/// Keys of every configured page.
pub fn page_keys() -> Vec<&'static str> {
    SEO_CONFIG.page_keys().collect()
}

/// Whether `page_key` names a configured page.
pub fn is_known_page(page_key: &str) -> bool {
    SEO_CONFIG.page(page_key).is_some()
}

/// Builds the `<head>` a browser would end up with after the front end
/// updated it for `page_key`.
pub fn render_head(config: &SeoConfig, page_key: &str) -> MemoryHead {
    let mut head = MemoryHead::new();
    let Ok(()) = update_meta_tags(&mut head, config, page_key);
    let Ok(_) = update_structured_data(&mut head, config, page_key);
    head
}
