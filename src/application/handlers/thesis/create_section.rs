//! CreateSectionHandler - Command handler for inserting a numbered section.

use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::{DocumentId, SectionKey};
use crate::domain::thesis::{DocumentUpdate, SectionKeyGenerator, ThesisDocument, ThesisError};
use crate::ports::DocumentStore;

use super::load_document;

/// Command to insert a section at a 1-based position.
#[derive(Debug, Clone)]
pub struct CreateSectionCommand {
    pub document_id: DocumentId,
    pub title: String,
    /// Values past the end append; values below 1 are rejected.
    pub position: i64,
}

/// Result of successful section insertion.
#[derive(Debug, Clone)]
pub struct CreateSectionResult {
    pub key: SectionKey,
    /// Position actually used after clamping.
    pub ordinal: u32,
    pub display_title: String,
    pub document: ThesisDocument,
}

/// Handler for inserting sections.
pub struct CreateSectionHandler {
    store: Arc<dyn DocumentStore>,
    keys: Arc<dyn SectionKeyGenerator>,
}

impl CreateSectionHandler {
    pub fn new(store: Arc<dyn DocumentStore>, keys: Arc<dyn SectionKeyGenerator>) -> Self {
        Self { store, keys }
    }

    pub async fn handle(
        &self,
        cmd: CreateSectionCommand,
    ) -> Result<CreateSectionResult, ThesisError> {
        // 1. Load document
        let document = load_document(self.store.as_ref(), &cmd.document_id).await?;

        // 2. Insert into a copy of the section map
        let mut sections = document.sections().clone();
        let key = sections.insert_at(cmd.position, &cmd.title, self.keys.as_ref())?;
        let (ordinal, display_title) = sections
            .get(&key)
            .and_then(|s| s.ordinal().map(|o| (o, s.display_title().to_string())))
            .ok_or_else(|| ThesisError::SectionNotFound(key.clone()))?;

        // 3. Swap the whole map in
        let document = self
            .store
            .save(&cmd.document_id, DocumentUpdate::Sections(sections))
            .await?;

        debug!(
            document_id = %cmd.document_id,
            section_key = %key,
            requested = cmd.position,
            ordinal,
            "Section inserted"
        );

        Ok(CreateSectionResult {
            key,
            ordinal,
            display_title,
            document,
        })
    }
}
