//! Storage Adapters
//!
//! Implementations of the DocumentStore port.
//!
//! ## Available Adapters
//!
//! - **JsonFileDocumentStore** - All documents in one JSON file on disk
//! - **InMemoryDocumentStore** - Documents in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryDocumentStore, JsonFileDocumentStore};
//!
//! // Production: file-based storage
//! let store = JsonFileDocumentStore::new("./data/theses.json");
//!
//! // Testing: in-memory storage
//! let store = InMemoryDocumentStore::new();
//! ```

mod in_memory_document_store;
mod json_file_document_store;

pub use in_memory_document_store::InMemoryDocumentStore;
pub use json_file_document_store::JsonFileDocumentStore;
