//! Thesis command and query handlers.
//!
//! Each handler loads the document, computes the change off to the side and
//! hands the store one complete update.

mod create_document;
mod create_section;
mod delete_document;
mod delete_section;
mod get_document;
mod get_section_text;
mod list_documents;
mod rename_document_title;
mod rename_section;
mod set_featured;
mod update_document_field;
mod update_section_content;

#[cfg(test)]
mod test_support;

pub use create_document::{CreateDocumentCommand, CreateDocumentHandler, CreateDocumentResult};
pub use create_section::{CreateSectionCommand, CreateSectionHandler, CreateSectionResult};
pub use delete_document::{DeleteDocumentCommand, DeleteDocumentHandler};
pub use delete_section::{DeleteSectionCommand, DeleteSectionHandler, DeleteSectionResult};
pub use get_document::{DocumentView, GetDocumentHandler, GetDocumentQuery};
pub use get_section_text::{GetSectionTextHandler, GetSectionTextQuery, SectionText};
pub use list_documents::{DocumentSummary, ListDocumentsHandler, ListDocumentsQuery};
pub use rename_document_title::{
    RenameDocumentTitleCommand, RenameDocumentTitleHandler, RenameDocumentTitleResult,
};
pub use rename_section::{RenameSectionCommand, RenameSectionHandler, RenameSectionResult};
pub use set_featured::{SetFeaturedCommand, SetFeaturedHandler};
pub use update_document_field::{UpdateDocumentFieldCommand, UpdateDocumentFieldHandler};
pub use update_section_content::{
    UpdateSectionContentCommand, UpdateSectionContentHandler, UpdateSectionContentResult,
};

use crate::domain::foundation::DocumentId;
use crate::domain::thesis::{ThesisDocument, ThesisError};
use crate::ports::DocumentStore;

/// Loads a document or fails with `DocumentNotFound`.
pub(crate) async fn load_document(
    store: &dyn DocumentStore,
    id: &DocumentId,
) -> Result<ThesisDocument, ThesisError> {
    store
        .find(id)
        .await?
        .ok_or_else(|| ThesisError::DocumentNotFound(id.clone()))
}
