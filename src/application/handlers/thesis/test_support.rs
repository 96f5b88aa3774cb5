//! Shared fixtures for thesis handler tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::foundation::{DocumentId, DomainError, ErrorCode, SectionKey, Timestamp};
use crate::domain::thesis::{
    Contact, DocumentSeed, DocumentUpdate, SectionKeyGenerator, ThesisDocument,
};
use crate::ports::{document_already_exists, document_not_found, DocumentStore};

pub struct MockDocumentStore {
    documents: Mutex<Vec<ThesisDocument>>,
    saves: Mutex<Vec<DocumentUpdate>>,
    pub fail_save: bool,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
            saves: Mutex::new(Vec::new()),
            fail_save: false,
        }
    }

    pub fn with_document(document: ThesisDocument) -> Self {
        let store = Self::new();
        store.documents.lock().unwrap().push(document);
        store
    }

    pub fn failing(document: ThesisDocument) -> Self {
        let mut store = Self::with_document(document);
        store.fail_save = true;
        store
    }

    pub fn get(&self, id: &DocumentId) -> Option<ThesisDocument> {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id() == id)
            .cloned()
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn load_all(&self) -> Result<BTreeMap<DocumentId, ThesisDocument>, DomainError> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .map(|d| (d.id().clone(), d.clone()))
            .collect())
    }

    async fn find(&self, id: &DocumentId) -> Result<Option<ThesisDocument>, DomainError> {
        Ok(self.get(id))
    }

    async fn create(&self, document: ThesisDocument) -> Result<ThesisDocument, DomainError> {
        let mut documents = self.documents.lock().unwrap();
        if documents.iter().any(|d| d.id() == document.id()) {
            return Err(document_already_exists(document.id()));
        }
        documents.push(document.clone());
        Ok(document)
    }

    async fn save(
        &self,
        id: &DocumentId,
        update: DocumentUpdate,
    ) -> Result<ThesisDocument, DomainError> {
        if self.fail_save {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                "Simulated save failure",
            ));
        }
        let mut documents = self.documents.lock().unwrap();
        let document = documents
            .iter_mut()
            .find(|d| d.id() == id)
            .ok_or_else(|| document_not_found(id))?;
        document.apply_update(update.clone()).map_err(DomainError::from)?;
        document.touch(Timestamp::now());
        self.saves.lock().unwrap().push(update);
        Ok(document.clone())
    }

    async fn delete(&self, id: &DocumentId) -> Result<(), DomainError> {
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        documents.retain(|d| d.id() != id);
        if documents.len() == before {
            return Err(document_not_found(id));
        }
        Ok(())
    }
}

/// Hands out `new_0`, `new_1`, ...
pub struct SequentialKeys(Mutex<u32>);

impl SequentialKeys {
    pub fn new() -> Self {
        Self(Mutex::new(0))
    }
}

impl SectionKeyGenerator for SequentialKeys {
    fn generate(&self) -> SectionKey {
        let mut next = self.0.lock().unwrap();
        let key = SectionKey::new(format!("new_{}", next)).unwrap();
        *next += 1;
        key
    }
}

pub fn test_document_id() -> DocumentId {
    DocumentId::new("climate-tech").unwrap()
}

pub fn test_seed() -> DocumentSeed {
    DocumentSeed::new(test_document_id(), "Climate Tech", "Energy")
        .with_contact(Contact {
            name: Some("Ada Park".to_string()),
            email: Some("ada@example.com".to_string()),
            ..Contact::default()
        })
        .with_sources(vec!["IEA 2024".to_string()])
}

pub fn test_document() -> ThesisDocument {
    ThesisDocument::create(test_seed()).unwrap()
}

pub fn key(k: &str) -> SectionKey {
    SectionKey::new(k).unwrap()
}
