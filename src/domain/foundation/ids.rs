//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Identifier of a thesis document within the backing store.
///
/// Document ids are caller-chosen slugs (e.g. `"fintech-infrastructure"`),
/// so unlike section keys they are never generated here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a new DocumentId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("document_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Opaque, stable key of a section inside one document's section map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionKey(String);

impl SectionKey {
    /// Prefix used for generated keys.
    pub const GENERATED_PREFIX: &'static str = "section_";

    /// Creates a SectionKey from an existing value, returning error if empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ValidationError::empty_field("section_key"));
        }
        Ok(Self(key))
    }

    /// Creates a new random key (`section_` + 12 hex chars of a v4 UUID).
    pub fn random() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(format!("{}{}", Self::GENERATED_PREFIX, &hex[..12]))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SectionKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_id_rejects_blank() {
        assert!(DocumentId::new("").is_err());
        assert!(DocumentId::new("   ").is_err());
        assert_eq!(DocumentId::new("saas-billing").unwrap().as_str(), "saas-billing");
    }

    #[test]
    fn document_id_serializes_as_plain_string() {
        let id = DocumentId::new("edtech").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"edtech\"");
    }

    #[test]
    fn section_key_rejects_empty() {
        assert!(SectionKey::new("").is_err());
    }

    #[test]
    fn random_section_keys_have_prefix_and_differ() {
        let a = SectionKey::random();
        let b = SectionKey::random();

        assert!(a.as_str().starts_with(SectionKey::GENERATED_PREFIX));
        assert_eq!(a.as_str().len(), SectionKey::GENERATED_PREFIX.len() + 12);
        assert_ne!(a, b);
    }

    #[test]
    fn section_key_parses_from_str() {
        let key: SectionKey = "executiveSummary".parse().unwrap();
        assert_eq!(key.to_string(), "executiveSummary");
    }
}
