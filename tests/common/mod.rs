pub mod fixtures;

use compatkit::{
    AnnotatorBuilder, CompatMetadata, DataSource, Document, DocumentAnnotator, DocumentTree,
    Element, FailurePolicy, Node,
};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Installs the test logger once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A `<dfn>` carrying a `caniuse` attribute, with an optional id.
pub fn dfn(id: Option<&str>, feature: &str) -> Node {
    let el = Element::new("dfn")
        .with_attr("caniuse", feature)
        .with_child(feature.to_string());
    let el = match id {
        Some(id) => el.with_attr("id", id),
        None => el,
    };
    Node::from(el)
}

pub fn annotator(
    source: Arc<dyn DataSource>,
    metadata: CompatMetadata,
    policy: FailurePolicy,
) -> DocumentAnnotator {
    AnnotatorBuilder::new()
        .with_data_source(source)
        .with_metadata(metadata)
        .with_failure_policy(policy)
        .build()
        .expect("data source is set")
}

/// Panels appended directly under the body.
pub fn panels(doc: &Document) -> Vec<Element> {
    doc.children(doc.body())
        .iter()
        .filter_map(|&id| doc.to_element(id))
        .filter(|el| el.has_class("caniuse-status"))
        .collect()
}
