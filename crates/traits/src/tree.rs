//! DocumentTree trait: the mutation capabilities the annotator needs.
//!
//! The annotator does not care how a document is stored. It locates elements
//! by attribute, reads and edits attributes, and appends rendered fragments.

use std::fmt::Debug;

pub trait DocumentTree {
    /// Opaque, copyable reference to an element in the tree.
    type Handle: Copy + Eq + Debug;

    /// Detached subtree type accepted by `append_child`.
    type Fragment;

    /// The element that receives appended panels.
    fn body(&self) -> Self::Handle;

    /// All elements carrying `attr`, in document order.
    fn find_all_with_attribute(&self, attr: &str) -> Vec<Self::Handle>;

    fn get_attribute(&self, el: Self::Handle, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, el: Self::Handle, name: &str, value: &str);

    /// Removes `name` from `el`, returning the previous value.
    fn remove_attribute(&mut self, el: Self::Handle, name: &str) -> Option<String>;

    /// Appends a detached fragment as the last child of `parent` and returns
    /// a handle to the inserted root.
    fn append_child(&mut self, parent: Self::Handle, fragment: Self::Fragment) -> Self::Handle;

    /// Serializes the start tag of `el` (used in diagnostics).
    fn serialize_tag(&self, el: Self::Handle) -> String;

    /// Adds `class` to the element's class list unless already present.
    fn add_class(&mut self, el: Self::Handle, class: &str) {
        let merged = match self.get_attribute(el, "class") {
            Some(existing) if existing.split_whitespace().any(|c| c == class) => return,
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {class}", existing.trim())
            }
            _ => class.to_string(),
        };
        self.set_attribute(el, "class", &merged);
    }
}
