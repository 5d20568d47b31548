//! Properties module - listing models, search, and the in-memory store.

mod properties_model;
mod properties_repository;
mod properties_seed;
mod properties_service;
mod properties_traits;

pub use properties_model::{
    parse_features, NewProperty, Property, PropertySearchFilters, PropertyStatus, PropertyType,
};
pub use properties_repository::InMemoryPropertyRepository;
pub use properties_seed::demo_properties;
pub use properties_service::PropertyService;
pub use properties_traits::{PropertyRepositoryTrait, PropertyServiceTrait};
