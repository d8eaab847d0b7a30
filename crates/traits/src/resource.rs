//! DataSource trait for abstracting dataset fetches.
//!
//! The annotator never touches the filesystem or network directly: it asks a
//! `DataSource` for a named resource inside a namespace and gets raw text back.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Error type for resource fetch operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid resource format: {0}")]
    InvalidFormat(String),
}

/// A synchronous, blocking source of named text resources.
///
/// # Implementations
///
/// - `FilesystemDataSource` (compatkit-resource): reads `<base>/<namespace>/<name>`
/// - `InMemoryDataSource`: pre-populated memory, always available
///
/// # Example
///
/// ```ignore
/// let source = InMemoryDataSource::new();
/// source.add("caniuse", "data.json", index_json)?;
/// let text = source.fetch("caniuse", "data.json")?;
/// ```
pub trait DataSource: Send + Sync + Debug {
    /// Fetch a resource by namespace and name.
    ///
    /// Returns the full resource text, or an error if it cannot be produced.
    fn fetch(&self, namespace: &str, name: &str) -> Result<String, ResourceError>;

    /// Returns a human-readable name for this source (for logging/debugging).
    fn name(&self) -> &'static str;
}

fn resource_key(namespace: &str, name: &str) -> String {
    format!("{namespace}/{name}")
}

/// An in-memory data source.
///
/// Resources must be added before use. Every call to `fetch` is counted,
/// including failed ones, so callers can observe how often the source was hit.
#[derive(Debug, Default)]
pub struct InMemoryDataSource {
    resources: RwLock<HashMap<String, String>>,
    fetches: AtomicUsize,
}

impl InMemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource under `namespace/name`, replacing any previous text.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(
        &self,
        namespace: &str,
        name: &str,
        text: impl Into<String>,
    ) -> Result<(), ResourceError> {
        let key = resource_key(namespace, name);
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::LoadFailed {
                path: key.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources.insert(key, text.into());
        Ok(())
    }

    /// Remove a resource from the store.
    ///
    /// Returns `None` if the lock is poisoned or the resource doesn't exist.
    pub fn remove(&self, namespace: &str, name: &str) -> Option<String> {
        self.resources
            .write()
            .ok()?
            .remove(&resource_key(namespace, name))
    }

    /// Number of `fetch` calls served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    /// Number of stored resources. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DataSource for InMemoryDataSource {
    fn fetch(&self, namespace: &str, name: &str) -> Result<String, ResourceError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        let key = resource_key(namespace, name);
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                path: key.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources
            .get(&key)
            .cloned()
            .ok_or(ResourceError::NotFound(key))
    }

    fn name(&self) -> &'static str {
        "InMemoryDataSource"
    }
}
