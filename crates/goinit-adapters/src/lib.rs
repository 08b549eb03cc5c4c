//! Infrastructure adapters for goinit.
//!
//! This crate implements the ports defined in `goinit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod download;
pub mod http;

// Re-export commonly used adapters
pub use download::{FileDownloadSink, MemorySink};
pub use http::HttpGeneratorClient;
