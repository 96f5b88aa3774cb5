//! In-Memory Document Store Adapter
//!
//! Keeps documents in a map behind a `RwLock`.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DocumentId, DomainError, Timestamp};
use crate::domain::thesis::{DocumentUpdate, ThesisDocument};
use crate::ports::{document_already_exists, document_not_found, DocumentStore};

/// In-memory storage for thesis documents
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<BTreeMap<DocumentId, ThesisDocument>>>,
}

impl InMemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with documents, as loaded from elsewhere
    pub fn with_documents(documents: impl IntoIterator<Item = ThesisDocument>) -> Self {
        let map = documents
            .into_iter()
            .map(|doc| (doc.id().clone(), doc))
            .collect();
        Self {
            documents: Arc::new(RwLock::new(map)),
        }
    }

    /// Get the number of stored documents
    pub async fn document_count(&self) -> usize {
        self.documents.read().await.len()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn load_all(&self) -> Result<BTreeMap<DocumentId, ThesisDocument>, DomainError> {
        Ok(self.documents.read().await.clone())
    }

    async fn find(&self, id: &DocumentId) -> Result<Option<ThesisDocument>, DomainError> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn create(&self, mut document: ThesisDocument) -> Result<ThesisDocument, DomainError> {
        let mut documents = self.documents.write().await;
        if documents.contains_key(document.id()) {
            return Err(document_already_exists(document.id()));
        }
        document.touch(Timestamp::now());
        documents.insert(document.id().clone(), document.clone());
        Ok(document)
    }

    async fn save(
        &self,
        id: &DocumentId,
        update: DocumentUpdate,
    ) -> Result<ThesisDocument, DomainError> {
        let mut documents = self.documents.write().await;
        let current = documents.get(id).ok_or_else(|| document_not_found(id))?;

        // Mutate a copy so a rejected update leaves the stored document untouched.
        let mut updated = current.clone();
        updated.apply_update(update).map_err(DomainError::from)?;
        updated.touch(Timestamp::now());

        documents.insert(id.clone(), updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: &DocumentId) -> Result<(), DomainError> {
        self.documents
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| document_not_found(id))
    }
}
