//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DocumentStore` - Persistence of thesis documents

mod document_store;

pub use document_store::{document_already_exists, document_not_found, DocumentStore};
