// src/pipeline/builder.rs
use super::annotator::DocumentAnnotator;
use super::config::{FailurePolicy, load_metadata_file};
use crate::error::PipelineError;
use compatkit_core::{CompatMetadata, DataSource};
use compatkit_resource::FilesystemDataSource;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a `DocumentAnnotator`.
#[derive(Default)]
pub struct AnnotatorBuilder {
    data_source: Option<Arc<dyn DataSource>>,
    metadata: CompatMetadata,
    failure_policy: FailurePolicy,
}

impl AnnotatorBuilder {
    /// Creates a builder with panels disabled and no data source.
    pub fn new() -> Self {
        Default::default()
    }

    /// Reads the dataset from `<dir>/caniuse/`.
    pub fn with_data_dir<P: AsRef<Path>>(self, dir: P) -> Self {
        self.with_data_source(Arc::new(FilesystemDataSource::new(dir)))
    }

    /// Uses a custom data source, e.g. an `InMemoryDataSource` in tests.
    pub fn with_data_source(mut self, source: Arc<dyn DataSource>) -> Self {
        self.data_source = Some(source);
        self
    }

    pub fn with_metadata(mut self, metadata: CompatMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Loads document metadata from a JSON file.
    pub fn with_metadata_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.metadata = load_metadata_file(path.as_ref())?;
        Ok(self)
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn build(self) -> Result<DocumentAnnotator, PipelineError> {
        let source = self.data_source.ok_or_else(|| {
            PipelineError::Config(
                "No data source has been configured. Use `with_data_dir` or `with_data_source`."
                    .to_string(),
            )
        })?;
        log::debug!(
            "Annotator ready: source={}, panels={}, policy={:?}",
            source.name(),
            self.metadata.include_panels,
            self.failure_policy
        );
        Ok(DocumentAnnotator::new(source, self.metadata, self.failure_policy))
    }
}
