//! Static bucket and file catalog

mod error;
mod model;
mod sample;

pub use error::CatalogError;
pub use model::{AccessLevel, Bucket, Catalog, FileEntry};
