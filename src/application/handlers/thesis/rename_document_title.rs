//! RenameDocumentTitleHandler - Command handler for renaming a thesis.

use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::DocumentId;
use crate::domain::thesis::{DocumentField, DocumentUpdate, ThesisDocument, ThesisError};
use crate::ports::DocumentStore;

use super::load_document;

/// Command to rename a document.
#[derive(Debug, Clone)]
pub struct RenameDocumentTitleCommand {
    pub document_id: DocumentId,
    pub new_title: String,
}

/// Result of successful rename.
#[derive(Debug, Clone)]
pub struct RenameDocumentTitleResult {
    pub old_title: String,
    pub document: ThesisDocument,
}

/// Handler for renaming documents.
pub struct RenameDocumentTitleHandler {
    store: Arc<dyn DocumentStore>,
}

impl RenameDocumentTitleHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RenameDocumentTitleCommand,
    ) -> Result<RenameDocumentTitleResult, ThesisError> {
        // 1. Load document and capture old title
        let old_title = load_document(self.store.as_ref(), &cmd.document_id)
            .await?
            .title()
            .to_string();

        // 2. Persist the single field
        let document = self
            .store
            .save(
                &cmd.document_id,
                DocumentUpdate::Field(DocumentField::Title(cmd.new_title)),
            )
            .await?;

        debug!(document_id = %cmd.document_id, new_title = %document.title(), "Document renamed");

        Ok(RenameDocumentTitleResult {
            old_title,
            document,
        })
    }
}
