use chrono::Utc;
use std::sync::RwLock;

use super::documents_model::{Document, DocumentType};
use super::documents_traits::DocumentRepositoryTrait;
use crate::constants::PLACEHOLDER_DOCUMENT_URL;
use crate::errors::{lock_poisoned, Result};

/// Document store backed by a vector; contents are lost when dropped.
#[derive(Default)]
pub struct InMemoryDocumentRepository {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-loaded with the demo paperwork for the demo listings.
    pub fn with_demo_data() -> Self {
        let now = Utc::now();
        let seed = vec![
            Document {
                id: "1".to_string(),
                name: "Purchase Agreement.pdf".to_string(),
                document_type: DocumentType::Contract,
                url: PLACEHOLDER_DOCUMENT_URL.to_string(),
                uploaded_by: "123".to_string(),
                uploaded_at: now,
                property_id: "1".to_string(),
                is_secure: true,
            },
            Document {
                id: "2".to_string(),
                name: "Property Deed.pdf".to_string(),
                document_type: DocumentType::Deed,
                url: PLACEHOLDER_DOCUMENT_URL.to_string(),
                uploaded_by: "456".to_string(),
                uploaded_at: now,
                property_id: "2".to_string(),
                is_secure: true,
            },
        ];
        Self {
            documents: RwLock::new(seed),
        }
    }
}

impl DocumentRepositoryTrait for InMemoryDocumentRepository {
    fn list(&self) -> Result<Vec<Document>> {
        Ok(self.documents.read().map_err(lock_poisoned)?.clone())
    }

    fn insert(&self, document: Document) -> Result<Document> {
        self.documents.write().map_err(lock_poisoned)?.push(document.clone());
        Ok(document)
    }

    fn delete(&self, document_id: &str) -> Result<Option<Document>> {
        let mut documents = self.documents.write().map_err(lock_poisoned)?;
        let removed = documents
            .iter()
            .position(|d| d.id == document_id)
            .map(|index| documents.remove(index));
        Ok(removed)
    }
}
