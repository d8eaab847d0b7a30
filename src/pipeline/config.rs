use crate::error::PipelineError;
use compatkit_core::CompatMetadata;
use std::fs;
use std::io;
use std::path::Path;

/// How per-element annotation errors affect the build result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Any per-element error fails the build once the pass has finished. (Default)
    #[default]
    Strict,
    /// Per-element errors are logged and reported, but the build succeeds.
    Lenient,
}

/// Reads document metadata from a JSON file.
pub fn load_metadata_file(path: &Path) -> Result<CompatMetadata, PipelineError> {
    let text = fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read metadata from '{}': {}", path.display(), e),
        ))
    })?;
    Ok(serde_json::from_str(&text)?)
}
