//! [`HeadDocument`] over the live browser DOM.

use humanbench_core::seo::{HeadDocument, Selector};
use web_sys::{Document, Element, HtmlHeadElement};

use crate::error::SeoWebError;

/// The `<head>` of the current page.
pub struct WebHead {
    document: Document,
    head: HtmlHeadElement,
}

impl WebHead {
    pub fn new(document: Document) -> Result<Self, SeoWebError> {
        let head = document.head().ok_or(SeoWebError::NoHead)?;
        Ok(Self { document, head })
    }

    /// Attaches to `window.document`.
    pub fn from_window() -> Result<Self, SeoWebError> {
        let window = web_sys::window().ok_or(SeoWebError::NoWindow)?;
        let document = window.document().ok_or(SeoWebError::NoDocument)?;
        Self::new(document)
    }
}

impl HeadDocument for WebHead {
    type Element = Element;
    type Error = SeoWebError;

    fn set_title(&mut self, title: &str) -> Result<(), SeoWebError> {
        self.document.set_title(title);
        Ok(())
    }

    fn query_selector(&self, selector: &Selector) -> Result<Option<Element>, SeoWebError> {
        Ok(self.head.query_selector(&selector.to_string())?)
    }

    fn append_element(&mut self, tag: &str) -> Result<Element, SeoWebError> {
        let element = self.document.create_element(tag)?;
        self.head.append_child(&element)?;
        Ok(element)
    }

    fn set_attribute(
        &mut self,
        element: &Element,
        name: &str,
        value: &str,
    ) -> Result<(), SeoWebError> {
        Ok(element.set_attribute(name, value)?)
    }

    fn set_text_content(&mut self, element: &Element, text: &str) -> Result<(), SeoWebError> {
        element.set_text_content(Some(text));
        Ok(())
    }
}
