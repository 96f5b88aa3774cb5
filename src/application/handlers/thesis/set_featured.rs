//! SetFeaturedHandler - Command handler for the featured flag.

use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::DocumentId;
use crate::domain::thesis::{DocumentUpdate, ThesisDocument, ThesisError};
use crate::ports::DocumentStore;

/// Command to mark a document as featured or not.
#[derive(Debug, Clone)]
pub struct SetFeaturedCommand {
    pub document_id: DocumentId,
    pub featured: bool,
}

/// Handler for toggling featured.
pub struct SetFeaturedHandler {
    store: Arc<dyn DocumentStore>,
}

impl SetFeaturedHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SetFeaturedCommand) -> Result<ThesisDocument, ThesisError> {
        let document = self
            .store
            .save(&cmd.document_id, DocumentUpdate::Featured(cmd.featured))
            .await?;
        debug!(document_id = %cmd.document_id, featured = cmd.featured, "Featured flag set");
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::thesis::test_support::*;

    #[tokio::test]
    async fn toggles_featured() {
        let store = Arc::new(MockDocumentStore::with_document(test_document()));
        let handler = SetFeaturedHandler::new(store.clone());

        let on = handler
            .handle(SetFeaturedCommand {
                document_id: test_document_id(),
                featured: true,
            })
            .await
            .unwrap();
        assert!(on.is_featured());

        let off = handler
            .handle(SetFeaturedCommand {
                document_id: test_document_id(),
                featured: false,
            })
            .await
            .unwrap();
        assert!(!off.is_featured());
        assert_eq!(store.save_count(), 2);
    }

    #[tokio::test]
    async fn missing_document_is_not_found() {
        let handler = SetFeaturedHandler::new(Arc::new(MockDocumentStore::new()));
        let result = handler
            .handle(SetFeaturedCommand {
                document_id: test_document_id(),
                featured: true,
            })
            .await;
        assert_eq!(result.unwrap_err(), ThesisError::DocumentNotFound(test_document_id()));
    }
}
