//! Document Store Port - Persistence of whole thesis documents.
//!
//! The store is a JSON key-value collection keyed by document id. Section
//! layout changes are computed by the caller and handed over as a complete
//! replacement section map, so each write is all-or-nothing.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::foundation::{DocumentId, DomainError, ErrorCode};
use crate::domain::thesis::{DocumentUpdate, ThesisDocument};

/// Port for thesis document persistence.
///
/// # Contract
///
/// Implementations must:
/// - Round-trip documents through JSON faithfully, section order included
/// - Apply a `save` as one atomic swap as seen by readers
/// - Stamp `updatedAt` on every successful write
/// - Report a missing document as `DOCUMENT_NOT_FOUND` with a `document_id` detail
///
/// Concurrent writers to the same document are last-write-wins.
///
/// # Usage
///
/// ```rust,ignore
/// let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
///
/// store.create(ThesisDocument::create(seed)?).await?;
/// store.save(&id, DocumentUpdate::Featured(true)).await?;
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load every document, keyed by id.
    async fn load_all(&self) -> Result<BTreeMap<DocumentId, ThesisDocument>, DomainError>;

    /// Find a single document.
    ///
    /// Returns `Ok(None)` when no document has this id.
    async fn find(&self, id: &DocumentId) -> Result<Option<ThesisDocument>, DomainError>;

    /// Store a newly created document.
    ///
    /// # Errors
    ///
    /// - `DOCUMENT_ALREADY_EXISTS` if the id is taken
    /// - `STORAGE_ERROR` / `SERIALIZATION_ERROR` on write failure
    async fn create(&self, document: ThesisDocument) -> Result<ThesisDocument, DomainError>;

    /// Apply one partial update and return the stored result.
    ///
    /// # Errors
    ///
    /// - `DOCUMENT_NOT_FOUND` if the id is unknown
    /// - `VALIDATION_FAILED` if the update is rejected by the document
    /// - `STORAGE_ERROR` / `SERIALIZATION_ERROR` on write failure
    async fn save(
        &self,
        id: &DocumentId,
        update: DocumentUpdate,
    ) -> Result<ThesisDocument, DomainError>;

    /// Delete a document.
    ///
    /// # Errors
    ///
    /// - `DOCUMENT_NOT_FOUND` if the id is unknown
    async fn delete(&self, id: &DocumentId) -> Result<(), DomainError>;
}

/// Builds the not-found error every store reports.
pub fn document_not_found(id: &DocumentId) -> DomainError {
    DomainError::new(
        ErrorCode::DocumentNotFound,
        format!("Document not found: {}", id),
    )
    .with_detail("document_id", id.as_str())
}

/// Builds the conflict error every store reports.
pub fn document_already_exists(id: &DocumentId) -> DomainError {
    DomainError::new(
        ErrorCode::DocumentAlreadyExists,
        format!("Document already exists: {}", id),
    )
    .with_detail("document_id", id.as_str())
}
