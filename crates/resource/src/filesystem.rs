//! Filesystem-backed data source.
//!
//! A resource `name` in `namespace` lives at `<base>/<namespace>/<name>`.
//! Lookups that would leave the base directory are refused.

use compatkit_traits::{DataSource, ResourceError};
use std::path::{Component, Path, PathBuf};

/// Reads dataset resources from a local data directory.
#[derive(Debug)]
pub struct FilesystemDataSource {
    base_path: PathBuf,
    /// Canonicalized base path for containment checks
    canonical_base: Option<PathBuf>,
}

impl FilesystemDataSource {
    /// Creates a source rooted at `base_path`.
    ///
    /// The base does not have to exist yet; containment is then checked
    /// component-wise instead of by canonical prefix.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves `namespace/name` under the base, or `None` if it would escape.
    fn resolve_path_safe(&self, namespace: &str, name: &str) -> Option<PathBuf> {
        let relative = Path::new(namespace).join(name);
        let only_normal = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !only_normal {
            return None;
        }

        let full_path = self.base_path.join(&relative);
        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            // symlinks may still point outside the data directory
            return canonical.starts_with(base).then_some(canonical);
        }
        Some(full_path)
    }
}

impl DataSource for FilesystemDataSource {
    fn fetch(&self, namespace: &str, name: &str) -> Result<String, ResourceError> {
        let display = format!("{namespace}/{name}");
        let full_path = self.resolve_path_safe(namespace, name).ok_or_else(|| {
            ResourceError::NotFound(format!("{display} (path traversal blocked)"))
        })?;

        log::debug!("Reading {} from {}", display, full_path.display());
        std::fs::read_to_string(&full_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ResourceError::NotFound(display),
            std::io::ErrorKind::InvalidData => {
                ResourceError::InvalidFormat(format!("{display} is not valid UTF-8"))
            }
            _ => ResourceError::LoadFailed {
                path: display,
                message: e.to_string(),
            },
        })
    }

    fn name(&self) -> &'static str {
        "FilesystemDataSource"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write(base: &Path, namespace: &str, name: &str, text: &str) {
        let dir = base.join(namespace);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), text).unwrap();
    }

    #[test]
    fn test_filesystem_source_fetch_existing_resource() {
        let dir = tempdir().unwrap();
        write(dir.path(), "caniuse", "data.json", "{\"updated\": 0}");

        let source = FilesystemDataSource::new(dir.path());
        assert_eq!(
            source.fetch("caniuse", "data.json").unwrap(),
            "{\"updated\": 0}"
        );
    }

    #[test]
    fn test_filesystem_source_not_found() {
        let dir = tempdir().unwrap();
        let source = FilesystemDataSource::new(dir.path());

        let result = source.fetch("caniuse", "feature-grid.json");
        assert!(
            matches!(result, Err(ResourceError::NotFound(ref p)) if p == "caniuse/feature-grid.json")
        );
    }

    #[test]
    fn test_filesystem_source_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("caniuse")).unwrap();
        fs::write(dir.path().join("caniuse/data.json"), [0xff, 0xfe, 0x00]).unwrap();

        let source = FilesystemDataSource::new(dir.path());
        let result = source.fetch("caniuse", "data.json");
        assert!(matches!(result, Err(ResourceError::InvalidFormat(_))));
    }

    #[test]
    fn test_filesystem_source_blocks_path_traversal() {
        let dir = tempdir().unwrap();
        let source = FilesystemDataSource::new(dir.path());

        assert!(source.fetch("..", "passwd").is_err());
        assert!(source.fetch("caniuse", "../../etc/passwd").is_err());
        assert!(source.fetch("/etc", "passwd").is_err());
    }

    #[test]
    fn test_filesystem_source_base() {
        let dir = tempdir().unwrap();
        let source = FilesystemDataSource::new(dir.path());
        assert_eq!(source.base(), dir.path());
        assert_eq!(source.name(), "FilesystemDataSource");
    }
}
