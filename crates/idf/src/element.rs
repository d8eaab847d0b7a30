use crate::TextStr;
use indexmap::IndexMap;
use serde::Deserialize;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node inside a detached fragment.
///
/// Deserializes from either a JSON string (text) or an element object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(TextStr),
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl Node {
    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text(text) => out.push_str(&escape_text(text)),
        }
    }
}

/// An owned element with ordered attributes.
///
/// Attribute order is insertion order and is kept through serialization, so
/// rendered output is deterministic.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Element {
    pub tag: TextStr,
    #[serde(default)]
    pub attrs: IndexMap<TextStr, TextStr>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<TextStr>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<TextStr>, value: impl Into<TextStr>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<TextStr>, value: impl Into<TextStr>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Removes an attribute while keeping the order of the remaining ones.
    pub fn remove_attr(&mut self, name: &str) -> Option<TextStr> {
        self.attrs.shift_remove(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of the whole subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// `<tag attr="value">`, without children or closing tag.
    pub fn start_tag(&self) -> String {
        start_tag(&self.tag, self.attrs.iter())
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        out.push_str(&self.start_tag());
        if is_void(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for child in &el.children {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(inner) => collect_text(inner, out),
        }
    }
}

pub(crate) fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

pub(crate) fn start_tag<'a>(
    tag: &str,
    attrs: impl Iterator<Item = (&'a TextStr, &'a TextStr)>,
) -> String {
    let mut out = format!("<{tag}");
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');
    out
}

pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_serialize_in_insertion_order() {
        let el = Element::new("aside")
            .with_attr("class", "caniuse-status wrapped")
            .with_attr("data-deco", "");
        assert_eq!(
            el.to_html(),
            r#"<aside class="caniuse-status wrapped" data-deco=""></aside>"#
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let el = Element::new("input").with_attr("type", "button");
        assert_eq!(el.to_html(), r#"<input type="button">"#);
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let el = Element::new("a")
            .with_attr("title", "say \"hi\" & <go>")
            .with_child("1 < 2 & 3");
        assert_eq!(
            el.to_html(),
            r#"<a title="say &quot;hi&quot; &amp; &lt;go&gt;">1 &lt; 2 &amp; 3</a>"#
        );
    }

    #[test]
    fn test_remove_attr_keeps_order_of_rest() {
        let mut el = Element::new("dfn")
            .with_attr("id", "x")
            .with_attr("caniuse", "flexbox")
            .with_attr("class", "a");
        assert_eq!(el.remove_attr("caniuse").as_deref(), Some("flexbox"));
        assert_eq!(el.start_tag(), r#"<dfn id="x" class="a">"#);
    }

    #[test]
    fn test_text_content_walks_subtree() {
        let el = Element::new("p")
            .with_child("Source: ")
            .with_child(Element::new("a").with_child("caniuse.com"))
            .with_child(" as of 2020-01-01");
        assert_eq!(el.text_content(), "Source: caniuse.com as of 2020-01-01");
        assert_eq!(el.child_elements().count(), 1);
    }

    #[test]
    fn test_deserialize_nested_nodes() {
        let node: Node = serde_json::from_str(
            r#"{"tag": "p", "children": ["See ", {"tag": "dfn", "attrs": {"id": "x", "caniuse": "grid"}}]}"#,
        )
        .unwrap();
        let Node::Element(p) = node else {
            panic!("expected element");
        };
        assert_eq!(p.children[0], Node::Text("See ".to_string()));
        assert_eq!(
            p.child_elements().next().unwrap().start_tag(),
            r#"<dfn id="x" caniuse="grid">"#
        );
    }

    #[test]
    fn test_has_class() {
        let el = Element::new("span").with_attr("class", "chrome partial");
        assert!(el.has_class("partial"));
        assert!(!el.has_class("part"));
    }
}
