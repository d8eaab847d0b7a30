//! Data sources for the compatkit annotator.
//!
//! This crate provides platform-specific implementations of the
//! `DataSource` trait from compatkit-traits.
//!
//! ## Available Sources
//!
//! - [`FilesystemDataSource`]: Reads resources from a local data directory
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory source from compatkit-traits:
//! - [`InMemoryDataSource`]: Pre-populated in-memory storage

mod filesystem;

pub use filesystem::FilesystemDataSource;

// Re-export the in-memory source from compatkit-traits for convenience
pub use compatkit_traits::InMemoryDataSource;
