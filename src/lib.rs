//! Thesis Sections - numbered-section model for industry thesis documents
//!
//! This crate maintains the ordered, Roman-numbered sections of long-form
//! thesis documents and converts section bodies to and from editable text.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
