//! DeleteDocumentHandler - Command handler for deleting thesis documents.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::DocumentId;
use crate::domain::thesis::ThesisError;
use crate::ports::DocumentStore;

/// Command to delete a document.
#[derive(Debug, Clone)]
pub struct DeleteDocumentCommand {
    pub document_id: DocumentId,
}

/// Handler for deleting documents.
pub struct DeleteDocumentHandler {
    store: Arc<dyn DocumentStore>,
}

impl DeleteDocumentHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteDocumentCommand) -> Result<(), ThesisError> {
        self.store.delete(&cmd.document_id).await?;
        info!(document_id = %cmd.document_id, "Thesis document deleted");
        Ok(())
    }
}
