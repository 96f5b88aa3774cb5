//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - DocumentStore implementations (in-memory, JSON file)

pub mod storage;
