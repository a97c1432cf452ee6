use serde_json::{json, Value};

use super::config::{ResolvedPage, SeoConfig};
use super::head::{HeadDocument, Selector};

/// Which attribute names a `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

/// Finds the element matching `selector` or appends one carrying the
/// selector's attribute.
fn find_or_create<D: HeadDocument>(doc: &mut D, selector: &Selector) -> Result<D::Element, D::Error> {
    if let Some(element) = doc.query_selector(selector)? {
        return Ok(element);
    }
    let element = doc.append_element(&selector.tag)?;
    doc.set_attribute(&element, &selector.attribute, &selector.value)?;
    Ok(element)
}

/// Upserts `<meta {attr}="{name}" content="{content}">`.
pub fn update_meta_tag<D: HeadDocument>(
    doc: &mut D,
    attr: MetaAttr,
    name: &str,
    content: &str,
) -> Result<(), D::Error> {
    let element = find_or_create(doc, &Selector::new("meta", attr.as_str(), name))?;
    doc.set_attribute(&element, "content", content)
}

/// Upserts `<link rel="canonical" href="{url}">`.
pub fn update_canonical_url<D: HeadDocument>(doc: &mut D, url: &str) -> Result<(), D::Error> {
    let element = find_or_create(doc, &Selector::new("link", "rel", "canonical"))?;
    doc.set_attribute(&element, "href", url)
}

/// Writes title, description, Open Graph, Twitter Card and canonical tags
/// for `page_key`. Unknown keys get the site defaults.
pub fn update_meta_tags<D: HeadDocument>(
    doc: &mut D,
    config: &SeoConfig,
    page_key: &str,
) -> Result<(), D::Error> {
    let page = config.resolve(page_key);
    let base = &config.base;

    doc.set_title(page.title)?;

    update_meta_tag(doc, MetaAttr::Name, "title", page.title)?;
    update_meta_tag(doc, MetaAttr::Name, "description", page.description)?;
    update_meta_tag(doc, MetaAttr::Name, "keywords", page.keywords)?;
    update_meta_tag(doc, MetaAttr::Name, "author", page.author)?;

    update_meta_tag(doc, MetaAttr::Property, "og:type", "website")?;
    update_meta_tag(doc, MetaAttr::Property, "og:site_name", base.site_name)?;
    update_meta_tag(doc, MetaAttr::Property, "og:locale", base.locale)?;
    update_meta_tag(doc, MetaAttr::Property, "og:title", page.title)?;
    update_meta_tag(doc, MetaAttr::Property, "og:description", page.description)?;
    update_meta_tag(doc, MetaAttr::Property, "og:url", &page.url)?;
    update_meta_tag(doc, MetaAttr::Property, "og:image", page.image)?;

    update_meta_tag(doc, MetaAttr::Property, "twitter:card", "summary_large_image")?;
    update_meta_tag(doc, MetaAttr::Property, "twitter:title", page.title)?;
    update_meta_tag(doc, MetaAttr::Property, "twitter:description", page.description)?;
    update_meta_tag(doc, MetaAttr::Property, "twitter:image", page.image)?;

    update_canonical_url(doc, &page.url)
}

/// The JSON-LD `WebPage` description of a page.
pub fn structured_data(config: &SeoConfig, page: &ResolvedPage) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebPage",
        "name": page.title,
        "description": page.description,
        "url": page.url,
        "mainEntity": {
            "@type": "WebApplication",
            "name": config.base.site_name,
            "applicationCategory": "Game",
            "operatingSystem": "Web Browser"
        }
    })
}

/// Upserts the single `application/ld+json` block for `page_key`.
///
/// Returns `false`, leaving the head untouched, for unknown keys.
pub fn update_structured_data<D: HeadDocument>(
    doc: &mut D,
    config: &SeoConfig,
    page_key: &str,
) -> Result<bool, D::Error> {
    if config.page(page_key).is_none() {
        return Ok(false);
    }
    let page = config.resolve(page_key);
    let element = find_or_create(doc, &Selector::new("script", "type", "application/ld+json"))?;
    doc.set_text_content(&element, &structured_data(config, &page).to_string())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::{MemoryHead, SEO_CONFIG};

    fn meta(attr: MetaAttr, name: &str) -> Selector {
        Selector::new("meta", attr.as_str(), name)
    }

    fn content(head: &MemoryHead, attr: MetaAttr, name: &str) -> Option<String> {
        head.find(&meta(attr, name))
            .and_then(|e| e.attribute("content"))
            .map(str::to_string)
    }

    #[test]
    fn test_update_meta_tags_sets_page_values() {
        let mut head = MemoryHead::new();
        update_meta_tags(&mut head, &SEO_CONFIG, "numberMemory").unwrap();

        assert_eq!(head.title(), "Number Memory Test - Human Benchmark");
        assert_eq!(
            content(&head, MetaAttr::Property, "og:url").as_deref(),
            Some("https://humanbenchmark.xyz/number-memory")
        );
        assert_eq!(
            content(&head, MetaAttr::Property, "twitter:image").as_deref(),
            Some("https://humanbenchmark.xyz/icons/Icon-512.png")
        );
        assert_eq!(
            content(&head, MetaAttr::Name, "author").as_deref(),
            Some("Human Benchmark")
        );
        let canonical = head.find(&Selector::new("link", "rel", "canonical")).unwrap();
        assert_eq!(
            canonical.attribute("href"),
            Some("https://humanbenchmark.xyz/number-memory")
        );
    }

    #[test]
    fn test_update_meta_tags_twice_is_idempotent() {
        let mut head = MemoryHead::new();
        update_meta_tags(&mut head, &SEO_CONFIG, "about").unwrap();
        let first = head.clone();
        update_meta_tags(&mut head, &SEO_CONFIG, "about").unwrap();

        assert_eq!(head, first);
        for element in head.elements() {
            let (attr, value) = &element.attributes[0];
            let selector = Selector::new(element.tag.clone(), attr.clone(), value.clone());
            assert_eq!(head.count(&selector), 1, "{selector}");
        }
    }

    #[test]
    fn test_switching_pages_updates_in_place() {
        let mut head = MemoryHead::new();
        update_meta_tags(&mut head, &SEO_CONFIG, "home").unwrap();
        let element_count = head.elements().len();
        update_meta_tags(&mut head, &SEO_CONFIG, "leaderboard").unwrap();

        assert_eq!(head.elements().len(), element_count);
        assert_eq!(
            content(&head, MetaAttr::Name, "description").as_deref(),
            SEO_CONFIG.page("leaderboard").map(|p| p.description)
        );
    }

    #[test]
    fn test_existing_tags_are_reused() {
        let mut head = MemoryHead::new();
        let id = head.append_element("meta").unwrap();
        head.set_attribute(&id, "name", "description").unwrap();
        head.set_attribute(&id, "content", "stale").unwrap();

        update_meta_tags(&mut head, &SEO_CONFIG, "features").unwrap();

        assert_eq!(head.count(&meta(MetaAttr::Name, "description")), 1);
        assert_ne!(
            content(&head, MetaAttr::Name, "description").as_deref(),
            Some("stale")
        );
    }

    #[test]
    fn test_twitter_tags_use_property_attribute() {
        let mut head = MemoryHead::new();
        let id = head.append_element("meta").unwrap();
        head.set_attribute(&id, "property", "twitter:title").unwrap();
        head.set_attribute(&id, "content", "stale").unwrap();

        update_meta_tags(&mut head, &SEO_CONFIG, "about").unwrap();

        assert_eq!(head.count(&meta(MetaAttr::Property, "twitter:title")), 1);
        assert_eq!(head.count(&meta(MetaAttr::Name, "twitter:title")), 0);
        assert_eq!(
            content(&head, MetaAttr::Property, "twitter:title").as_deref(),
            Some("About Human Benchmark - Cognitive Testing Platform")
        );
    }

    #[test]
    fn test_unknown_page_uses_base() {
        let mut head = MemoryHead::new();
        update_meta_tags(&mut head, &SEO_CONFIG, "does-not-exist").unwrap();

        assert_eq!(head.title(), SEO_CONFIG.base.title);
        assert_eq!(
            content(&head, MetaAttr::Property, "og:url").as_deref(),
            Some("https://humanbenchmark.xyz/")
        );
    }

    #[test]
    fn test_structured_data_single_block() {
        let mut head = MemoryHead::new();
        assert!(update_structured_data(&mut head, &SEO_CONFIG, "decisionMaking").unwrap());
        assert!(update_structured_data(&mut head, &SEO_CONFIG, "decisionMaking").unwrap());

        let selector = Selector::new("script", "type", "application/ld+json");
        assert_eq!(head.count(&selector), 1);

        let text = head.find(&selector).and_then(|e| e.text.clone()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["@type"], "WebPage");
        assert_eq!(value["url"], "https://humanbenchmark.xyz/decision-making");
        assert_eq!(value["mainEntity"]["applicationCategory"], "Game");
    }

    #[test]
    fn test_structured_data_unknown_page_is_noop() {
        let mut head = MemoryHead::new();
        assert!(!update_structured_data(&mut head, &SEO_CONFIG, "nope").unwrap());
        assert!(head.elements().is_empty());
    }
}
