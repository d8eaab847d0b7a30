//! Annotation pipeline orchestration.
//!
//! - [`AnnotatorBuilder`]: fluent builder wiring a data source and metadata
//! - [`DocumentAnnotator`]: runs the Can I Use pass over a document
//! - [`render_html`]: serializes an annotated document with its build assets
//!
//! # Example
//!
//! ```ignore
//! use compatkit::{AnnotatorBuilder, CompatMetadata};
//!
//! let annotator = AnnotatorBuilder::new()
//!     .with_data_dir("data")
//!     .with_metadata(CompatMetadata { include_panels: true, ..Default::default() })
//!     .build()?;
//!
//! let mut ctx = annotator.new_build();
//! annotator.annotate(&mut doc, &mut ctx)?;
//! let html = compatkit::render_html(&doc, &ctx);
//! ```

mod annotator;
mod builder;
pub mod config;

pub use annotator::{DocumentAnnotator, render_html};
pub use builder::AnnotatorBuilder;
pub use config::FailurePolicy;
