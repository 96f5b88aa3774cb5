//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::thesis::{
    // Document handlers
    CreateDocumentCommand, CreateDocumentHandler, CreateDocumentResult,
    DeleteDocumentCommand, DeleteDocumentHandler,
    DocumentSummary, ListDocumentsHandler, ListDocumentsQuery,
    DocumentView, GetDocumentHandler, GetDocumentQuery,
    RenameDocumentTitleCommand, RenameDocumentTitleHandler, RenameDocumentTitleResult,
    SetFeaturedCommand, SetFeaturedHandler,
    UpdateDocumentFieldCommand, UpdateDocumentFieldHandler,
    // Section handlers
    CreateSectionCommand, CreateSectionHandler, CreateSectionResult,
    DeleteSectionCommand, DeleteSectionHandler, DeleteSectionResult,
    GetSectionTextHandler, GetSectionTextQuery, SectionText,
    RenameSectionCommand, RenameSectionHandler, RenameSectionResult,
    UpdateSectionContentCommand, UpdateSectionContentHandler, UpdateSectionContentResult,
};
