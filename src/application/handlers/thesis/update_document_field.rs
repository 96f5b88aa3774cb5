//! UpdateDocumentFieldHandler - Replaces one top-level document field.
//!
//! Contact and sources are only written to their top-level fields; the
//! matching sections are left as they are.

use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::DocumentId;
use crate::domain::thesis::{DocumentField, DocumentUpdate, ThesisDocument, ThesisError};
use crate::ports::DocumentStore;

/// Command to set one scalar field.
#[derive(Debug, Clone)]
pub struct UpdateDocumentFieldCommand {
    pub document_id: DocumentId,
    pub field: DocumentField,
}

/// Handler for scalar field updates.
pub struct UpdateDocumentFieldHandler {
    store: Arc<dyn DocumentStore>,
}

impl UpdateDocumentFieldHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: UpdateDocumentFieldCommand,
    ) -> Result<ThesisDocument, ThesisError> {
        let field = cmd.field.name();
        let document = self
            .store
            .save(&cmd.document_id, DocumentUpdate::Field(cmd.field))
            .await?;
        debug!(document_id = %cmd.document_id, field, "Document field updated");
        Ok(document)
    }
}
