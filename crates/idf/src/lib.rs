// src/idf/lib.rs
//! In-memory document format.
//!
//! Two representations live here:
//! - [`Element`]/[`Node`]: owned, detached fragments. Renderers build these
//!   and hand them to a tree for insertion.
//! - [`Document`]: an arena tree rooted at a `body` element, implementing
//!   [`compatkit_traits::DocumentTree`] so annotators can mutate it through
//!   handles.

mod document;
mod element;

pub use document::{Document, NodeId};
pub use element::{Element, Node, escape_attr, escape_text};

/// A string type for the document.
pub type TextStr = String;
