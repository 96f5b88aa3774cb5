//! CreateDocumentHandler - Command handler for creating thesis documents.

use std::sync::Arc;
use tracing::info;

use crate::domain::thesis::{DocumentSeed, ThesisDocument, ThesisError};
use crate::ports::DocumentStore;

/// Command to create a document with the default section scaffold.
#[derive(Debug, Clone)]
pub struct CreateDocumentCommand {
    pub seed: DocumentSeed,
}

/// Result of successful document creation.
#[derive(Debug, Clone)]
pub struct CreateDocumentResult {
    pub document: ThesisDocument,
}

/// Handler for creating documents.
pub struct CreateDocumentHandler {
    store: Arc<dyn DocumentStore>,
}

impl CreateDocumentHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CreateDocumentCommand,
    ) -> Result<CreateDocumentResult, ThesisError> {
        // 1. Build scaffold
        let document = ThesisDocument::create(cmd.seed)?;

        // 2. Persist
        let document = self.store.create(document).await?;

        info!(
            document_id = %document.id(),
            sections = document.sections().len(),
            "Thesis document created"
        );

        Ok(CreateDocumentResult { document })
    }
}
