// src/error.rs
//! Error types for catalog loading and per-element annotation failures.

use compatkit_traits::ResourceError;
use thiserror::Error;

/// Build-wide failure: the dataset could not be loaded.
///
/// Any of these aborts the annotator for the whole build.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Couldn't fetch Can I Use resource '{resource}': {source}")]
    Fetch {
        resource: String,
        #[source]
        source: ResourceError,
    },
    #[error("Couldn't parse Can I Use resource '{resource}': {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Can I Use data has an unrepresentable update timestamp: {0}")]
    InvalidTimestamp(i64),
}

/// Fatal problem with a single annotated element.
///
/// These are collected rather than returned early, so one build reports
/// every bad annotation at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("Unrecognized Can I Use feature ID: {feature}\n{element}")]
    UnrecognizedFeature { feature: String, element: String },
    #[error("Elements with `caniuse` attribute need to have an ID as well. Got:\n{element}")]
    MissingId { element: String },
}

impl AnnotationError {
    /// The serialized start tag of the offending element.
    pub fn element(&self) -> &str {
        match self {
            AnnotationError::UnrecognizedFeature { element, .. } => element,
            AnnotationError::MissingId { element } => element,
        }
    }
}
