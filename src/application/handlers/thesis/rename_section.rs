//! RenameSectionHandler - Command handler for renaming a section.

use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::{DocumentId, SectionKey};
use crate::domain::thesis::{DocumentUpdate, ThesisDocument, ThesisError};
use crate::ports::DocumentStore;

use super::load_document;

/// Command to rename a section. Numbered sections keep their numeral.
#[derive(Debug, Clone)]
pub struct RenameSectionCommand {
    pub document_id: DocumentId,
    pub key: SectionKey,
    pub title: String,
}

/// Result of successful section rename.
#[derive(Debug, Clone)]
pub struct RenameSectionResult {
    pub old_title: String,
    pub new_title: String,
    pub document: ThesisDocument,
}

/// Handler for renaming sections.
pub struct RenameSectionHandler {
    store: Arc<dyn DocumentStore>,
}

impl RenameSectionHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RenameSectionCommand,
    ) -> Result<RenameSectionResult, ThesisError> {
        let document = load_document(self.store.as_ref(), &cmd.document_id).await?;

        let mut sections = document.sections().clone();
        let old_title = sections.rename(&cmd.key, &cmd.title)?;
        let new_title = sections
            .get(&cmd.key)
            .map(|s| s.display_title().to_string())
            .unwrap_or_default();

        let document = self
            .store
            .save(&cmd.document_id, DocumentUpdate::Sections(sections))
            .await?;

        debug!(
            document_id = %cmd.document_id,
            section_key = %cmd.key,
            %old_title,
            %new_title,
            "Section renamed"
        );

        Ok(RenameSectionResult {
            old_title,
            new_title,
            document,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::thesis::test_support::*;

    fn command(k: &str, title: &str) -> RenameSectionCommand {
        RenameSectionCommand {
            document_id: test_document_id(),
            key: key(k),
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn renames_and_keeps_numeral() {
        let store = Arc::new(MockDocumentStore::with_document(test_document()));
        let handler = RenameSectionHandler::new(store.clone());

        let result = handler
            .handle(command("conclusion", "Outlook"))
            .await
            .unwrap();

        assert_eq!(result.old_title, "II. Conclusion");
        assert_eq!(result.new_title, "II. Outlook");
        assert_eq!(
            store.get(&test_document_id()).unwrap().sections().titles()[1],
            "II. Outlook"
        );
    }

    #[tokio::test]
    async fn empty_title_is_rejected() {
        let store = Arc::new(MockDocumentStore::with_document(test_document()));
        let handler = RenameSectionHandler::new(store.clone());

        let result = handler.handle(command("conclusion", "")).await;

        assert!(matches!(result, Err(ThesisError::ValidationFailed { .. })));
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn unknown_section_is_not_found() {
        let handler = RenameSectionHandler::new(Arc::new(MockDocumentStore::with_document(
            test_document(),
        )));
        let result = handler.handle(command("market", "Market")).await;
        assert_eq!(result.unwrap_err(), ThesisError::SectionNotFound(key("market")));
    }
}
