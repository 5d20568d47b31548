//! Property repository and service traits.
//!
//! These traits keep listing operations storage-agnostic; the bundled
//! implementation is in-memory.

use super::properties_model::{NewProperty, Property, PropertySearchFilters};
use crate::errors::Result;

/// Trait defining the contract for listing storage.
pub trait PropertyRepositoryTrait: Send + Sync {
    /// Lists every listing in insertion order.
    fn list(&self) -> Result<Vec<Property>>;

    /// Retrieves a listing by its ID.
    fn get_by_id(&self, property_id: &str) -> Result<Property>;

    fn insert(&self, property: Property) -> Result<Property>;

    /// Replaces the listing with the same ID.
    fn update(&self, property: Property) -> Result<Property>;

    /// Deletes a listing by its ID.
    ///
    /// Returns the number of deleted records.
    fn delete(&self, property_id: &str) -> Result<usize>;
}

/// Trait defining the contract for listing operations.
pub trait PropertyServiceTrait: Send + Sync {
    fn get_properties(&self) -> Result<Vec<Property>>;
    fn get_property(&self, property_id: &str) -> Result<Property>;
    /// Lists a property for the signed-in user.
    fn add_property(&self, new_property: NewProperty) -> Result<Property>;
    fn update_property(&self, property: Property) -> Result<Property>;
    fn delete_property(&self, property_id: &str) -> Result<()>;
    fn search_properties(&self, filters: &PropertySearchFilters) -> Result<Vec<Property>>;
    /// Listings owned by the signed-in seller; empty for everyone else.
    fn user_properties(&self) -> Result<Vec<Property>>;
}
