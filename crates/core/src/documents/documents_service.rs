use chrono::Utc;
use log::info;
use std::sync::Arc;
use uuid::Uuid;

use super::documents_model::{Document, NewDocument};
use super::documents_traits::{DocumentRepositoryTrait, DocumentServiceTrait};
use crate::constants::PLACEHOLDER_DOCUMENT_URL;
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};
use crate::users::AuthServiceTrait;

/// Service for document bookkeeping
pub struct DocumentService {
    repository: Arc<dyn DocumentRepositoryTrait>,
    auth_service: Arc<dyn AuthServiceTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl DocumentService {
    pub fn new(
        repository: Arc<dyn DocumentRepositoryTrait>,
        auth_service: Arc<dyn AuthServiceTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            auth_service,
            event_sink,
        }
    }

    fn filtered(&self, keep: impl Fn(&Document) -> bool) -> Result<Vec<Document>> {
        Ok(self.repository.list()?.into_iter().filter(keep).collect())
    }
}

impl DocumentServiceTrait for DocumentService {
    fn get_documents(&self) -> Result<Vec<Document>> {
        self.repository.list()
    }

    fn add_document(&self, new_document: NewDocument) -> Result<Document> {
        let uploader = self.auth_service.require_user()?;
        new_document.validate()?;

        let url = if new_document.url.trim().is_empty() {
            PLACEHOLDER_DOCUMENT_URL.to_string()
        } else {
            new_document.url
        };

        let document = Document {
            id: Uuid::new_v4().to_string(),
            name: new_document.name.trim().to_string(),
            document_type: new_document.document_type,
            url,
            uploaded_by: uploader.id,
            uploaded_at: Utc::now(),
            property_id: new_document.property_id,
            is_secure: new_document.is_secure,
        };

        let created = self.repository.insert(document)?;
        info!(
            "Uploaded {} document {} for property {}",
            created.document_type.as_str(),
            created.id,
            created.property_id
        );
        self.event_sink.emit(DomainEvent::documents_changed(
            vec![created.id.clone()],
            vec![created.property_id.clone()],
        ));
        Ok(created)
    }

    fn delete_document(&self, document_id: &str) -> Result<()> {
        let removed = self
            .repository
            .delete(document_id)?
            .ok_or_else(|| Error::NotFound(format!("document {}", document_id)))?;
        info!("Deleted document {}", removed.id);
        self.event_sink.emit(DomainEvent::documents_changed(
            vec![removed.id],
            vec![removed.property_id],
        ));
        Ok(())
    }

    fn documents_for_property(&self, property_id: &str) -> Result<Vec<Document>> {
        self.filtered(|d| d.property_id == property_id)
    }

    fn user_documents(&self) -> Result<Vec<Document>> {
        match self.auth_service.current_user()? {
            Some(user) => self.filtered(|d| d.uploaded_by == user.id),
            None => Ok(Vec::new()),
        }
    }
}
