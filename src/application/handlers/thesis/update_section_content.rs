//! UpdateSectionContentHandler - Applies edited text to a section body.
//!
//! Simple and Observations bodies are parsed back into their shape. Every
//! other shape is replaced by a Simple body holding the raw text, dropping
//! its structured fields; the result reports which shape was discarded.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::foundation::{DocumentId, SectionKey};
use crate::domain::thesis::{
    apply_edit, ContentVariant, DocumentUpdate, ThesisDocument, ThesisError, VariantKind,
};
use crate::ports::DocumentStore;

use super::load_document;

/// Command to replace a section's content with edited text.
#[derive(Debug, Clone)]
pub struct UpdateSectionContentCommand {
    pub document_id: DocumentId,
    pub key: SectionKey,
    pub text: String,
}

/// Result of a content update.
#[derive(Debug, Clone)]
pub struct UpdateSectionContentResult {
    pub body: ContentVariant,
    /// Structured shape replaced by plain text, if any.
    pub discarded: Option<VariantKind>,
    pub document: ThesisDocument,
}

impl UpdateSectionContentResult {
    pub fn lossy(&self) -> bool {
        self.discarded.is_some()
    }
}

/// Handler for section content edits.
pub struct UpdateSectionContentHandler {
    store: Arc<dyn DocumentStore>,
}

impl UpdateSectionContentHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSectionContentCommand,
    ) -> Result<UpdateSectionContentResult, ThesisError> {
        // 1. Load document and section
        let document = load_document(self.store.as_ref(), &cmd.document_id).await?;
        let current = document
            .section(&cmd.key)
            .ok_or_else(|| ThesisError::SectionNotFound(cmd.key.clone()))?
            .body();

        // 2. Decode the text against the current shape
        let outcome = apply_edit(current, &cmd.text);
        if let Some(kind) = outcome.discarded {
            warn!(
                document_id = %cmd.document_id,
                section_key = %cmd.key,
                discarded = %kind,
                "Structured section saved as plain text"
            );
        }

        // 3. Persist the updated section map
        let mut sections = document.sections().clone();
        sections.replace_body(&cmd.key, outcome.body.clone())?;
        let document = self
            .store
            .save(&cmd.document_id, DocumentUpdate::Sections(sections))
            .await?;

        debug!(
            document_id = %cmd.document_id,
            section_key = %cmd.key,
            kind = %outcome.body.kind(),
            "Section content updated"
        );

        Ok(UpdateSectionContentResult {
            body: outcome.body,
            discarded: outcome.discarded,
            document,
        })
    }
}
