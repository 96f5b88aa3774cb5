//! JSON File Document Store Adapter
//!
//! Stores every document in one JSON object keyed by document id. Writes go
//! to a sibling temp file which is then renamed over the original, so readers
//! see either the old or the new collection, never a partial one.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::foundation::{DocumentId, DomainError, ErrorCode, Timestamp};
use crate::domain::thesis::{DocumentUpdate, ThesisDocument};
use crate::ports::{document_already_exists, document_not_found, DocumentStore};

type Collection = BTreeMap<DocumentId, ThesisDocument>;

/// File-based storage for thesis documents
#[derive(Debug)]
pub struct JsonFileDocumentStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileDocumentStore {
    /// Create a store backed by the JSON file at `path`
    ///
    /// The file and its parent directory are created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let store = JsonFileDocumentStore::new("./data/theses.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "theses.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, action: &str, err: std::io::Error) -> DomainError {
        DomainError::new(ErrorCode::StorageError, format!("Failed to {}: {}", action, err))
            .with_detail("path", self.path.display().to_string())
    }

    async fn read_collection(&self) -> Result<Collection, DomainError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Collection::new()),
            Err(e) => return Err(self.io_error("read document file", e)),
        };

        if json.trim().is_empty() {
            return Ok(Collection::new());
        }

        serde_json::from_str(&json).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Failed to parse document file: {}", e),
            )
            .with_detail("path", self.path.display().to_string())
        })
    }

    async fn write_collection(&self, documents: &Collection) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error("create storage directory", e))?;
        }

        let json = serde_json::to_string_pretty(documents).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Failed to serialize documents: {}", e),
            )
        })?;

        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| self.io_error("write temp file", e))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| self.io_error("replace document file", e))?;

        debug!(path = %self.path.display(), documents = documents.len(), "Document file written");
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileDocumentStore {
    async fn load_all(&self) -> Result<Collection, DomainError> {
        self.read_collection().await
    }

    async fn find(&self, id: &DocumentId) -> Result<Option<ThesisDocument>, DomainError> {
        Ok(self.read_collection().await?.remove(id))
    }

    async fn create(&self, mut document: ThesisDocument) -> Result<ThesisDocument, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut documents = self.read_collection().await?;

        if documents.contains_key(document.id()) {
            return Err(document_already_exists(document.id()));
        }

        document.touch(Timestamp::now());
        documents.insert(document.id().clone(), document.clone());
        self.write_collection(&documents).await?;
        Ok(document)
    }

    async fn save(
        &self,
        id: &DocumentId,
        update: DocumentUpdate,
    ) -> Result<ThesisDocument, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut documents = self.read_collection().await?;

        let document = documents.get_mut(id).ok_or_else(|| document_not_found(id))?;
        document.apply_update(update).map_err(DomainError::from)?;
        document.touch(Timestamp::now());
        let updated = document.clone();

        self.write_collection(&documents).await?;
        Ok(updated)
    }

    async fn delete(&self, id: &DocumentId) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut documents = self.read_collection().await?;

        if documents.remove(id).is_none() {
            return Err(document_not_found(id));
        }

        self.write_collection(&documents).await
    }
}
