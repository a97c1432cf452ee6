use std::convert::Infallible;
use std::fmt;

/// An attribute selector: `tag[attribute="value"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub tag: String,
    pub attribute: String,
    pub value: String,
}

impl Selector {
    pub fn new(tag: impl Into<String>, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}=\"{}\"]", self.tag, self.attribute, self.value)
    }
}

/// The subset of a document head the metadata updater touches.
pub trait HeadDocument {
    /// Handle to an element of the head.
    type Element;
    type Error;

    fn set_title(&mut self, title: &str) -> Result<(), Self::Error>;

    /// First element matching `selector`, if any.
    fn query_selector(&self, selector: &Selector) -> Result<Option<Self::Element>, Self::Error>;

    /// Creates an empty `tag` element at the end of the head.
    fn append_element(&mut self, tag: &str) -> Result<Self::Element, Self::Error>;

    fn set_attribute(
        &mut self,
        element: &Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), Self::Error>;

    fn set_text_content(&mut self, element: &Self::Element, text: &str) -> Result<(), Self::Error>;
}

/// One element of a [`MemoryHead`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadElement {
    pub tag: String,
    /// Attributes in insertion order.
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
}

impl HeadElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn matches(&self, selector: &Selector) -> bool {
        self.tag == selector.tag && self.attribute(&selector.attribute) == Some(selector.value.as_str())
    }

    fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);
        for (name, value) in &self.attributes {
            html.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
        }
        match (&self.text, self.tag.as_str()) {
            (Some(text), "script") => {
                html.push_str(&format!(">{}</script>", text.replace("</", "<\\/")))
            }
            (Some(text), tag) => html.push_str(&format!(">{}</{}>", escape_html(text), tag)),
            (None, "script") => html.push_str("></script>"),
            (None, _) => html.push('>'),
        }
        html
    }
}

/// A document head held in memory; used for tests and static prerendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHead {
    title: String,
    elements: Vec<HeadElement>,
}

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn elements(&self) -> &[HeadElement] {
        &self.elements
    }

    /// Number of elements matching `selector`.
    pub fn count(&self, selector: &Selector) -> usize {
        self.elements.iter().filter(|e| e.matches(selector)).count()
    }

    pub fn find(&self, selector: &Selector) -> Option<&HeadElement> {
        self.elements.iter().find(|e| e.matches(selector))
    }

    /// Renders the head as HTML, one element per line.
    pub fn to_html(&self) -> String {
        let mut lines = vec!["<head>".to_string()];
        if !self.title.is_empty() {
            lines.push(format!("  <title>{}</title>", escape_html(&self.title)));
        }
        for element in &self.elements {
            lines.push(format!("  {}", element.to_html()));
        }
        lines.push("</head>".to_string());
        lines.join("\n")
    }
}

impl HeadDocument for MemoryHead {
    type Element = usize;
    type Error = Infallible;

    fn set_title(&mut self, title: &str) -> Result<(), Infallible> {
        self.title = title.to_string();
        Ok(())
    }

    fn query_selector(&self, selector: &Selector) -> Result<Option<usize>, Infallible> {
        Ok(self.elements.iter().position(|e| e.matches(selector)))
    }

    fn append_element(&mut self, tag: &str) -> Result<usize, Infallible> {
        self.elements.push(HeadElement {
            tag: tag.to_string(),
            attributes: Vec::new(),
            text: None,
        });
        Ok(self.elements.len() - 1)
    }

    fn set_attribute(&mut self, element: &usize, name: &str, value: &str) -> Result<(), Infallible> {
        let element = &mut self.elements[*element];
        match element.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => element
                .attributes
                .push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn set_text_content(&mut self, element: &usize, text: &str) -> Result<(), Infallible> {
        self.elements[*element].text = Some(text.to_string());
        Ok(())
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
