//! Page metadata for search engines and link previews.
//!
//! The configuration table and the update logic are pure; the head they
//! write into is abstracted behind [`HeadDocument`], implemented here for
//! an in-memory head and in `humanbench_seo_web` for the browser DOM.

mod config;
mod head;
mod update;

pub use config::{PageConfig, ResolvedPage, SeoConfig, SiteConfig, SEO_CONFIG};
pub use head::{HeadDocument, HeadElement, MemoryHead, Selector};
pub use update::{
    structured_data, update_canonical_url, update_meta_tag, update_meta_tags,
    update_structured_data, MetaAttr,
};
