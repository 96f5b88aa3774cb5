//! DeleteSectionHandler - Command handler for removing a section.

use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::{DocumentId, SectionKey};
use crate::domain::thesis::{DocumentUpdate, Section, ThesisDocument, ThesisError};
use crate::ports::DocumentStore;

use super::load_document;

/// Command to delete a section by key.
#[derive(Debug, Clone)]
pub struct DeleteSectionCommand {
    pub document_id: DocumentId,
    pub key: SectionKey,
}

/// Result of successful section deletion.
#[derive(Debug, Clone)]
pub struct DeleteSectionResult {
    pub removed: Section,
    /// Document after renumbering.
    pub document: ThesisDocument,
}

/// Handler for deleting sections. Remaining numbered sections are renumbered.
pub struct DeleteSectionHandler {
    store: Arc<dyn DocumentStore>,
}

impl DeleteSectionHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: DeleteSectionCommand,
    ) -> Result<DeleteSectionResult, ThesisError> {
        let document = load_document(self.store.as_ref(), &cmd.document_id).await?;

        let mut sections = document.sections().clone();
        let removed = sections.remove_by_key(&cmd.key)?;

        let document = self
            .store
            .save(&cmd.document_id, DocumentUpdate::Sections(sections))
            .await?;

        debug!(
            document_id = %cmd.document_id,
            section_key = %cmd.key,
            remaining = document.sections().len(),
            "Section deleted"
        );

        Ok(DeleteSectionResult { removed, document })
    }
}
