use crate::TextStr;
use crate::element::{Element, Node, escape_text, is_void, start_tag};
use compatkit_traits::DocumentTree;
use indexmap::IndexMap;

/// Index of a node inside a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum Slot {
    Element {
        tag: TextStr,
        attrs: IndexMap<TextStr, TextStr>,
        children: Vec<NodeId>,
    },
    Text(TextStr),
}

/// Arena-backed document tree rooted at a `body` element.
///
/// Nodes are never freed; removing content is outside what the annotator
/// needs, so handles stay valid for the life of the document.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document containing only `<body>`.
    pub fn new() -> Self {
        Self {
            slots: vec![Slot::Element {
                tag: "body".to_string(),
                attrs: IndexMap::new(),
                children: Vec::new(),
            }],
            body: NodeId(0),
        }
    }

    /// A document whose body holds `nodes` in order.
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut doc = Self::new();
        let body = doc.body;
        for node in nodes {
            doc.insert(body, node);
        }
        doc
    }

    /// Inserts a detached node (and its subtree) as the last child of `parent`.
    pub fn insert(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = match node {
            Node::Text(text) => self.push_slot(Slot::Text(text)),
            Node::Element(el) => {
                let id = self.push_slot(Slot::Element {
                    tag: el.tag,
                    attrs: el.attrs,
                    children: Vec::new(),
                });
                for child in el.children {
                    self.insert(id, child);
                }
                id
            }
        };
        if let Some(Slot::Element { children, .. }) = self.slots.get_mut(parent.0) {
            children.push(id);
        }
        id
    }

    fn push_slot(&mut self, slot: Slot) -> NodeId {
        self.slots.push(slot);
        NodeId(self.slots.len() - 1)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.slots.get(id.0) {
            Some(Slot::Element { children, .. }) => children,
            _ => &[],
        }
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.slots.get(id.0) {
            Some(Slot::Element { tag, .. }) => Some(tag),
            _ => None,
        }
    }

    /// First element whose `id` attribute equals `value`.
    pub fn find_by_id(&self, value: &str) -> Option<NodeId> {
        self.preorder(self.body)
            .into_iter()
            .find(|&id| self.get_attribute(id, "id") == Some(value))
    }

    /// Copies the subtree at `id` out as a detached element.
    pub fn to_element(&self, id: NodeId) -> Option<Element> {
        match self.to_node(id)? {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    fn to_node(&self, id: NodeId) -> Option<Node> {
        match self.slots.get(id.0)? {
            Slot::Text(text) => Some(Node::Text(text.clone())),
            Slot::Element {
                tag,
                attrs,
                children,
            } => Some(Node::Element(Element {
                tag: tag.clone(),
                attrs: attrs.clone(),
                children: children.iter().filter_map(|&c| self.to_node(c)).collect(),
            })),
        }
    }

    /// Serializes the body and everything below it.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(self.body, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        match self.slots.get(id.0) {
            Some(Slot::Text(text)) => out.push_str(&escape_text(text)),
            Some(Slot::Element {
                tag,
                attrs,
                children,
            }) => {
                out.push_str(&start_tag(tag, attrs.iter()));
                if is_void(tag) {
                    return;
                }
                for &child in children {
                    self.write_html(child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            None => {}
        }
    }

    fn preorder(&self, root: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    fn attrs_mut(&mut self, id: NodeId) -> Option<&mut IndexMap<TextStr, TextStr>> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Element { attrs, .. }) => Some(attrs),
            _ => None,
        }
    }
}

impl DocumentTree for Document {
    type Handle = NodeId;
    type Fragment = Element;

    fn body(&self) -> NodeId {
        self.body
    }

    fn find_all_with_attribute(&self, attr: &str) -> Vec<NodeId> {
        self.preorder(self.body)
            .into_iter()
            .filter(|&id| self.get_attribute(id, attr).is_some())
            .collect()
    }

    fn get_attribute(&self, el: NodeId, name: &str) -> Option<&str> {
        match self.slots.get(el.0) {
            Some(Slot::Element { attrs, .. }) => attrs.get(name).map(String::as_str),
            _ => None,
        }
    }

    fn set_attribute(&mut self, el: NodeId, name: &str, value: &str) {
        if let Some(attrs) = self.attrs_mut(el) {
            attrs.insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, el: NodeId, name: &str) -> Option<String> {
        self.attrs_mut(el)?.shift_remove(name)
    }

    fn append_child(&mut self, parent: NodeId, fragment: Element) -> NodeId {
        self.insert(parent, Node::Element(fragment))
    }

    fn serialize_tag(&self, el: NodeId) -> String {
        match self.slots.get(el.0) {
            Some(Slot::Element { tag, attrs, .. }) => start_tag(tag, attrs.iter()),
            Some(Slot::Text(text)) => escape_text(text),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::from_nodes([
            Node::from(
                Element::new("p").with_child(
                    Element::new("dfn")
                        .with_attr("id", "one")
                        .with_attr("caniuse", "flexbox"),
                ),
            ),
            Node::from(Element::new("dfn").with_attr("caniuse", "grid")),
        ])
    }

    #[test]
    fn test_find_all_with_attribute_in_document_order() {
        let doc = sample();
        let found = doc.find_all_with_attribute("caniuse");
        let values: Vec<_> = found
            .iter()
            .map(|&id| doc.get_attribute(id, "caniuse").unwrap())
            .collect();
        assert_eq!(values, ["flexbox", "grid"]);
    }

    #[test]
    fn test_remove_attribute_drops_it_from_output() {
        let mut doc = sample();
        let el = doc.find_by_id("one").unwrap();
        assert_eq!(doc.remove_attribute(el, "caniuse").as_deref(), Some("flexbox"));
        assert_eq!(doc.remove_attribute(el, "caniuse"), None);
        assert!(!doc.to_html().contains("flexbox"));
    }

    #[test]
    fn test_add_class_merges_without_duplicates() {
        let mut doc = sample();
        let el = doc.find_by_id("one").unwrap();
        doc.add_class(el, "caniuse-paneled");
        doc.add_class(el, "caniuse-paneled");
        doc.set_attribute(el, "class", "x caniuse-paneled");
        doc.add_class(el, "y");
        assert_eq!(doc.get_attribute(el, "class"), Some("x caniuse-paneled y"));
    }

    #[test]
    fn test_append_child_goes_to_end_of_parent() {
        let mut doc = sample();
        let body = doc.body();
        let aside = doc.append_child(body, Element::new("aside").with_child("panel"));
        assert_eq!(doc.children(body).last(), Some(&aside));
        assert_eq!(doc.tag(aside), Some("aside"));
        assert!(doc.to_html().ends_with("<aside>panel</aside></body>"));
    }

    #[test]
    fn test_serialize_tag_is_start_tag_only() {
        let doc = sample();
        let el = doc.find_by_id("one").unwrap();
        assert_eq!(doc.serialize_tag(el), r#"<dfn id="one" caniuse="flexbox">"#);
    }

    #[test]
    fn test_to_element_round_trips_subtree() {
        let doc = sample();
        let p = doc.children(doc.body())[0];
        let el = doc.to_element(p).unwrap();
        assert_eq!(el.tag, "p");
        assert_eq!(el.child_elements().next().unwrap().attr("id"), Some("one"));
    }
}
