pub mod resource;
pub mod tree;

pub use resource::{DataSource, InMemoryDataSource, ResourceError};
pub use tree::DocumentTree;
