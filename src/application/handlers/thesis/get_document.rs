//! GetDocumentHandler - Query handler for a single thesis document.

use std::sync::Arc;

use crate::domain::foundation::DocumentId;
use crate::domain::thesis::{DualCopyReport, ThesisDocument, ThesisError};
use crate::ports::DocumentStore;

use super::load_document;

/// Query for one document.
#[derive(Debug, Clone)]
pub struct GetDocumentQuery {
    pub document_id: DocumentId,
}

/// A document plus the state of its duplicated contact/sources copies.
#[derive(Debug, Clone)]
pub struct DocumentView {
    pub document: ThesisDocument,
    pub dual_copies: DualCopyReport,
}

/// Handler for reading documents.
pub struct GetDocumentHandler {
    store: Arc<dyn DocumentStore>,
}

impl GetDocumentHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetDocumentQuery) -> Result<DocumentView, ThesisError> {
        let document = load_document(self.store.as_ref(), &query.document_id).await?;
        let dual_copies = document.dual_copy_report();
        Ok(DocumentView {
            document,
            dual_copies,
        })
    }
}
