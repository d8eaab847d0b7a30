//! # compatkit
//!
//! Adds "Can I Use" browser-support panels to generated HTML documents.
//!
//! The heavy lifting lives in `compatkit-core`; this crate wires it to the
//! filesystem and exposes a builder for a ready-to-run annotator.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{AnnotatorBuilder, DocumentAnnotator, FailurePolicy, render_html};

pub use compatkit_core::{
    AnnotationError, AnnotationReport, BuildContext, CatalogError, CompatMetadata,
    ConsistencyWarning,
};
pub use compatkit_idf::{Document, Element, Node};
pub use compatkit_resource::{FilesystemDataSource, InMemoryDataSource};
pub use compatkit_traits::{DataSource, DocumentTree};
