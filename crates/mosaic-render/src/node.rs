//! Content-node trees produced by section renderers.
//!
//! A [`Node`] is a lightweight element tree: tag, ordered attributes, and
//! children (nested elements, escaped text, or raw blocks for embedded
//! structured data). Sections build these trees; the composer appends them
//! to the page container; the static builder serializes them to HTML.

use std::fmt::Write as _;

/// A single element in a rendered section tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Child>,
}

#[derive(Debug, Clone, PartialEq)]
enum Child {
    Element(Node),
    /// Text content, HTML-escaped on serialization.
    Text(String),
    /// Raw markup emitted verbatim (JSON-LD payloads).
    Raw(String),
}

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "meta", "link"];

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set the `class` attribute.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.set_attr("class", class);
        self
    }

    /// Builder: set the `id` attribute.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.set_attr("id", id);
        self
    }

    /// Builder: set an arbitrary attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: append a text child.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Builder: append an element child.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Wrap a JSON value in a `script type="application/ld+json"` node.
    pub fn json_ld(value: &serde_json::Value) -> Self {
        let mut node = Node::new("script");
        node.set_attr("type", "application/ld+json");
        node.children.push(Child::Raw(value.to_string()));
        node
    }

    /// Set or replace an attribute, preserving insertion order.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn push_child(&mut self, child: Node) {
        self.children.push(Child::Element(child));
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Child::Text(text.into()));
    }

    /// Child elements, skipping text and raw children.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|c| match c {
            Child::Element(node) => Some(node),
            _ => None,
        })
    }

    pub fn child_count(&self) -> usize {
        self.children().count()
    }

    /// Concatenated text content of this subtree. Raw blocks are excluded.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Child::Element(node) => node.collect_text(out),
                Child::Text(text) => out.push_str(text),
                Child::Raw(_) => {}
            }
        }
    }

    /// Serialize the tree to HTML. Text and attribute values are escaped;
    /// raw children are emitted verbatim.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            match child {
                Child::Element(node) => node.write_html(out),
                Child::Text(text) => out.push_str(&escape_html(text)),
                Child::Raw(raw) => out.push_str(raw),
            }
        }

        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escape text for use in HTML content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_elements() {
        let node = Node::new("section")
            .class("about-us")
            .child(Node::new("h2").text("About"))
            .child(Node::new("p").text("Family owned"));

        assert_eq!(
            node.to_html(),
            "<section class=\"about-us\"><h2>About</h2><p>Family owned</p></section>"
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let node = Node::new("p")
            .attr("title", "a \"quoted\" & <odd> title")
            .text("1 < 2 & 3 > 2");

        let html = node.to_html();
        assert!(html.contains("a &quot;quoted&quot; &amp; &lt;odd&gt; title"));
        assert!(html.contains("1 &lt; 2 &amp; 3 &gt; 2"));
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let img = Node::new("img").attr("src", "logo.svg").attr("alt", "Logo");
        assert_eq!(img.to_html(), "<img src=\"logo.svg\" alt=\"Logo\">");
    }

    #[test]
    fn json_ld_is_emitted_verbatim() {
        let block = serde_json::json!({"@type": "Recipe", "name": "Royal Soup"});
        let node = Node::json_ld(&block);
        let html = node.to_html();
        assert!(html.starts_with("<script type=\"application/ld+json\">"));
        assert!(html.contains("\"@type\":\"Recipe\""));
        // Raw payloads never show up as text content.
        assert_eq!(node.text_content(), "");
    }

    #[test]
    fn set_attr_replaces_existing_value() {
        let mut node = Node::new("div").attr("dir", "ltr");
        node.set_attr("dir", "rtl");
        assert_eq!(node.get_attr("dir"), Some("rtl"));
        assert_eq!(node.to_html(), "<div dir=\"rtl\"></div>");
    }
}
