use super::documents_model::{Document, NewDocument};
use crate::errors::Result;

/// Trait for document storage
pub trait DocumentRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Document>>;
    fn insert(&self, document: Document) -> Result<Document>;
    /// Returns the removed document, or `None` if the id was unknown.
    fn delete(&self, document_id: &str) -> Result<Option<Document>>;
}

/// Trait for document operations
pub trait DocumentServiceTrait: Send + Sync {
    fn get_documents(&self) -> Result<Vec<Document>>;
    fn add_document(&self, new_document: NewDocument) -> Result<Document>;
    fn delete_document(&self, document_id: &str) -> Result<()>;
    fn documents_for_property(&self, property_id: &str) -> Result<Vec<Document>>;
    /// Documents uploaded by the signed-in user; empty when signed out.
    fn user_documents(&self) -> Result<Vec<Document>>;
}
