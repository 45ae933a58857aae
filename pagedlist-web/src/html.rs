//! Minimal element tree used to assemble pager markup.
//!
//! Text children and attribute values are escaped when rendered; raw children
//! are written verbatim and must only carry trusted markup. Attribute names are
//! restricted to ASCII alphanumerics, `-`, `_` and `:`.

use std::fmt;

use tracing::warn;

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(HtmlElement),
    Text(String),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElement {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl HtmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Set an attribute, replacing any previous value in place
    ///
    /// Names that are not valid attribute names are dropped.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if !is_attribute_name(&name) {
            warn!(tag = %self.tag, attribute = %name, "skipping invalid attribute name");
            return;
        }
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn extend_attrs<I, K, V>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in attributes {
            self.set_attr(name, value);
        }
    }

    /// Append classes to the `class` attribute, ignoring blank entries
    pub fn add_classes<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut class = self.attr("class").unwrap_or_default().to_string();
        for name in classes {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if !class.is_empty() {
                class.push(' ');
            }
            class.push_str(name);
        }
        if !class.is_empty() {
            self.set_attr("class", class);
        }
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_classes(classes);
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.attr("class")
            .map(|class| class.split_whitespace().any(|existing| existing == name))
            .unwrap_or(false)
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn with_child(mut self, child: HtmlElement) -> Self {
        self.push(Node::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push(Node::Text(text.into()));
        self
    }

    pub fn with_raw(mut self, markup: impl Into<String>) -> Self {
        self.push(Node::Raw(markup.into()));
        self
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HtmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape(value))?;
        }

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return f.write_str(" />");
        }

        f.write_str(">")?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => write!(f, "{element}"),
            Node::Text(text) => f.write_str(&escape(text)),
            Node::Raw(markup) => f.write_str(markup),
        }
    }
}

/// Escape text for use in element content or a double-quoted attribute
fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
