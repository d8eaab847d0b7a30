// src/error.rs
use compatkit_core::{AnnotationError, CatalogError};
use thiserror::Error;

/// Top-level error for configuring and running an annotation build.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Can I Use data failed to load: {0}")]
    Catalog(#[from] CatalogError),

    #[error("{} annotation error(s):\n{}", .0.len(), join_errors(.0))]
    Annotation(Vec<AnnotationError>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_errors(errors: &[AnnotationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
