//! ListDocumentsHandler - Query handler for document summaries.

use std::sync::Arc;

use crate::domain::foundation::{DocumentId, Timestamp};
use crate::domain::thesis::{ThesisDocument, ThesisError};
use crate::ports::DocumentStore;

/// Query for all documents.
#[derive(Debug, Clone, Default)]
pub struct ListDocumentsQuery {
    /// Only return featured documents.
    pub featured_only: bool,
}

/// Summary row for a document listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    pub id: DocumentId,
    pub title: String,
    pub industry: String,
    pub featured: bool,
    pub section_count: usize,
    pub updated_at: Option<Timestamp>,
}

impl From<&ThesisDocument> for DocumentSummary {
    fn from(document: &ThesisDocument) -> Self {
        Self {
            id: document.id().clone(),
            title: document.title().to_string(),
            industry: document.industry().to_string(),
            featured: document.is_featured(),
            section_count: document.sections().len(),
            updated_at: document.updated_at().copied(),
        }
    }
}

/// Handler for listing documents, ordered by id.
pub struct ListDocumentsHandler {
    store: Arc<dyn DocumentStore>,
}

impl ListDocumentsHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ListDocumentsQuery,
    ) -> Result<Vec<DocumentSummary>, ThesisError> {
        let documents = self.store.load_all().await?;
        Ok(documents
            .values()
            .filter(|d| !query.featured_only || d.is_featured())
            .map(DocumentSummary::from)
            .collect())
    }
}
