//! Thesis-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DocumentId, DomainError, ErrorCode, SectionKey, ValidationError};

/// Errors raised by thesis documents, the section registry and the handlers
/// that drive them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThesisError {
    /// Requested insert position is below 1.
    #[error("Invalid position {requested}: positions start at 1")]
    InvalidPosition { requested: i64 },

    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("Section not found: {0}")]
    SectionNotFound(SectionKey),

    /// Key generation kept colliding with existing keys.
    #[error("Could not generate a unique section key after {attempts} attempts")]
    DuplicateKey { attempts: u32 },

    /// An explicit key is already used by another section.
    #[error("Section key already in use: {0}")]
    KeyConflict(SectionKey),

    /// A numbered title whose numeral is outside the decode table.
    #[error("Malformed section title: '{title}'")]
    MalformedTitle { title: String },

    #[error("Document already exists: {0}")]
    DocumentAlreadyExists(DocumentId),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ThesisError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ThesisError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ThesisError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ThesisError::InvalidPosition { .. } => ErrorCode::InvalidPosition,
            ThesisError::DocumentNotFound(_) => ErrorCode::DocumentNotFound,
            ThesisError::SectionNotFound(_) => ErrorCode::SectionNotFound,
            ThesisError::DuplicateKey { .. } | ThesisError::KeyConflict(_) => ErrorCode::DuplicateKey,
            ThesisError::MalformedTitle { .. } => ErrorCode::MalformedTitle,
            ThesisError::DocumentAlreadyExists(_) => ErrorCode::DocumentAlreadyExists,
            ThesisError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ThesisError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationError> for ThesisError {
    fn from(err: ValidationError) -> Self {
        ThesisError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ThesisError {
    fn from(err: DomainError) -> Self {
        let document_id = err
            .details
            .get("document_id")
            .and_then(|id| DocumentId::new(id.clone()).ok());

        match (err.code, document_id) {
            (ErrorCode::DocumentNotFound, Some(id)) => ThesisError::DocumentNotFound(id),
            (ErrorCode::DocumentAlreadyExists, Some(id)) => ThesisError::DocumentAlreadyExists(id),
            (ErrorCode::ValidationFailed, _) => ThesisError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ThesisError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ThesisError> for DomainError {
    fn from(err: ThesisError) -> Self {
        match &err {
            ThesisError::ValidationFailed { field, message } => {
                DomainError::validation(field.clone(), message.clone())
            }
            ThesisError::DocumentNotFound(id) | ThesisError::DocumentAlreadyExists(id) => {
                DomainError::new(err.code(), err.to_string()).with_detail("document_id", id.as_str())
            }
            _ => DomainError::new(err.code(), err.to_string()),
        }
    }
}
