//! GetSectionTextHandler - Flattens a section body into editor text.

use std::sync::Arc;

use crate::domain::foundation::{DocumentId, SectionKey};
use crate::domain::thesis::{codec_for, ThesisError, VariantKind};
use crate::ports::DocumentStore;

use super::load_document;

/// Query for a section's editable text.
#[derive(Debug, Clone)]
pub struct GetSectionTextQuery {
    pub document_id: DocumentId,
    pub key: SectionKey,
}

/// Editable view of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionText {
    pub key: SectionKey,
    pub display_title: String,
    pub kind: VariantKind,
    pub text: String,
    /// False when saving the text back will replace the body with plain text.
    pub round_trips: bool,
}

/// Handler for reading section text.
pub struct GetSectionTextHandler {
    store: Arc<dyn DocumentStore>,
}

impl GetSectionTextHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSectionTextQuery) -> Result<SectionText, ThesisError> {
        let document = load_document(self.store.as_ref(), &query.document_id).await?;
        let section = document
            .section(&query.key)
            .ok_or_else(|| ThesisError::SectionNotFound(query.key.clone()))?;

        let codec = codec_for(section.body().kind());
        Ok(SectionText {
            key: query.key,
            display_title: section.display_title().to_string(),
            kind: codec.kind(),
            text: codec.encode(section.body()),
            round_trips: codec.can_decode(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::thesis::test_support::*;
    use crate::domain::thesis::{ContentVariant, DocumentUpdate, WinsFailuresBody};

    #[tokio::test]
    async fn returns_simple_text() {
        let store = Arc::new(MockDocumentStore::with_document(test_document()));
        let handler = GetSectionTextHandler::new(store);

        let view = handler
            .handle(GetSectionTextQuery {
                document_id: test_document_id(),
                key: key("sources"),
            })
            .await
            .unwrap();

        assert_eq!(view.display_title, "IV. Sources");
        assert_eq!(view.kind, VariantKind::Simple);
        assert_eq!(view.text, "IEA 2024");
        assert!(view.round_trips);
    }

    #[tokio::test]
    async fn flags_shapes_without_reverse_parser() {
        let mut document = test_document();
        let mut sections = document.sections().clone();
        sections
            .replace_body(
                &key("conclusion"),
                ContentVariant::WinsFailures(WinsFailuresBody {
                    intro: "Track record".to_string(),
                    wins: vec!["Solar".to_string()],
                    failures: vec!["Biofuels".to_string()],
                    conclusion: String::new(),
                }),
            )
            .unwrap();
        document.apply_update(DocumentUpdate::Sections(sections)).unwrap();
        let handler = GetSectionTextHandler::new(Arc::new(MockDocumentStore::with_document(document)));

        let view = handler
            .handle(GetSectionTextQuery {
                document_id: test_document_id(),
                key: key("conclusion"),
            })
            .await
            .unwrap();

        assert_eq!(view.kind, VariantKind::WinsFailures);
        assert!(view.text.contains("Wins:\n• Solar"));
        assert!(!view.round_trips);
    }

    #[tokio::test]
    async fn unknown_section_is_not_found() {
        let handler = GetSectionTextHandler::new(Arc::new(MockDocumentStore::with_document(
            test_document(),
        )));
        let result = handler
            .handle(GetSectionTextQuery {
                document_id: test_document_id(),
                key: key("nope"),
            })
            .await;
        assert!(matches!(result, Err(ThesisError::SectionNotFound(_))));
    }
}
