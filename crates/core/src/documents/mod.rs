//! Documents module - paperwork attached to listings.

mod documents_model;
mod documents_repository;
mod documents_service;
mod documents_traits;

pub use documents_model::{Document, DocumentType, NewDocument};
pub use documents_repository::InMemoryDocumentRepository;
pub use documents_service::DocumentService;
pub use documents_traits::{DocumentRepositoryTrait, DocumentServiceTrait};
