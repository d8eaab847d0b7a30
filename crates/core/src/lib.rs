//! # compatkit-core
//!
//! Browser-compatibility ("Can I Use") panels for generated documents.
//!
//! - **catalog**: build-scoped dataset index with lazily fetched feature records
//! - **panel**: pure rendering of a feature record into a panel fragment
//! - **validate**: advisory cross-check of declared spec URLs against the dataset
//! - **annotate**: the pass that ties the above to a document tree
//! - **assets**: named scripts and styles contributed once per build
//!
//! ## Design Principle
//!
//! Nothing here reads files or owns a document. Resources arrive through
//! [`DataSource`] and the document is edited through [`DocumentTree`], both
//! from compatkit-traits.

// Re-export foundation crates
pub use compatkit_idf as idf;
pub use compatkit_traits as traits;

pub mod annotate;
pub mod assets;
pub mod catalog;
pub mod error;
pub mod metadata;
pub mod panel;
pub mod status;
pub mod validate;

#[cfg(test)]
mod test_support;

pub use annotate::{AnnotationReport, BuildContext, add_compat_panels};
pub use assets::AssetRegistry;
pub use catalog::{CompatibilityCatalog, FeatureRecord};
pub use error::{AnnotationError, CatalogError};
pub use metadata::CompatMetadata;
pub use panel::{Panel, render_panel};
pub use validate::{ConsistencyWarning, validate_urls};

pub use traits::{DataSource, DocumentTree, InMemoryDataSource, ResourceError};
