//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `thesis` - Thesis documents, numbered sections and the section body codec

pub mod foundation;
pub mod thesis;
