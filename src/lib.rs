// Core browsing logic (always compiled, native and wasm32)
pub mod catalog;
pub mod filter;
pub mod preview;
pub mod selection;

// Leptos UI (only compiled with csr feature)
#[cfg(feature = "csr")]
pub mod ui;

// Native HTTP server and config (only compiled with server feature)
#[cfg(feature = "server")]
pub mod server;

pub use catalog::{AccessLevel, Bucket, Catalog, CatalogError, FileEntry};
pub use preview::PreviewState;
pub use selection::{Selection, SelectionEvent};
