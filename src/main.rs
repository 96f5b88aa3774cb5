use std::sync::Arc;

use thesis_sections::adapters::storage::{InMemoryDocumentStore, JsonFileDocumentStore};
use thesis_sections::application::{
    GetDocumentHandler, GetDocumentQuery, ListDocumentsHandler, ListDocumentsQuery,
};
use thesis_sections::config::{AppConfig, LoggingConfig, StorageBackend};
use thesis_sections::ports::DocumentStore;

fn init_tracing(logging: &LoggingConfig) {
    let filter = logging
        .env_filter()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn open_store(config: &AppConfig) -> Arc<dyn DocumentStore> {
    match config.storage.backend {
        StorageBackend::File => Arc::new(JsonFileDocumentStore::new(&config.storage.path)),
        StorageBackend::Memory => Arc::new(InMemoryDocumentStore::new()),
    }
}

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "invalid configuration");
        std::process::exit(1);
    }

    let store = open_store(&config);
    tracing::info!(
        backend = ?config.storage.backend,
        path = %config.storage.path.display(),
        "document store opened"
    );

    let summaries = match ListDocumentsHandler::new(store.clone())
        .handle(ListDocumentsQuery::default())
        .await
    {
        Ok(summaries) => summaries,
        Err(e) => {
            tracing::error!(error = %e, "failed to load documents");
            std::process::exit(1);
        }
    };

    tracing::info!(documents = summaries.len(), "documents loaded");

    let get_document = GetDocumentHandler::new(store);
    for summary in summaries {
        let view = match get_document
            .handle(GetDocumentQuery {
                document_id: summary.id.clone(),
            })
            .await
        {
            Ok(view) => view,
            Err(e) => {
                tracing::warn!(document_id = %summary.id, error = %e, "skipping document");
                continue;
            }
        };

        tracing::info!(
            document_id = %summary.id,
            title = %summary.title,
            industry = %summary.industry,
            featured = summary.featured,
            contiguous = view.document.sections().is_contiguous(),
            "document"
        );
        for section in view.document.sections().iter() {
            tracing::info!(
                document_id = %summary.id,
                section_key = %section.key(),
                ordinal = ?section.ordinal(),
                kind = %section.body().kind(),
                "  {}",
                section.display_title()
            );
        }
        if view.dual_copies.contact.diverged {
            tracing::warn!(document_id = %summary.id, "contact field and Contact section differ");
        }
        if view.dual_copies.sources.diverged {
            tracing::warn!(document_id = %summary.id, "sources field and Sources section differ");
        }
    }
}
