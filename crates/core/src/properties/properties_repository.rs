use std::sync::RwLock;

use super::properties_model::Property;
use super::properties_seed::demo_properties;
use super::properties_traits::PropertyRepositoryTrait;
use crate::errors::{lock_poisoned, Error, Result};

/// Listing store backed by a vector; contents are lost when dropped.
#[derive(Default)]
pub struct InMemoryPropertyRepository {
    properties: RwLock<Vec<Property>>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-loaded with the demo listings.
    pub fn with_demo_data() -> Self {
        Self::with_properties(demo_properties())
    }

    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self {
            properties: RwLock::new(properties),
        }
    }
}

impl PropertyRepositoryTrait for InMemoryPropertyRepository {
    fn list(&self) -> Result<Vec<Property>> {
        Ok(self.properties.read().map_err(lock_poisoned)?.clone())
    }

    fn get_by_id(&self, property_id: &str) -> Result<Property> {
        self.properties
            .read()
            .map_err(lock_poisoned)?
            .iter()
            .find(|p| p.id == property_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("property {}", property_id)))
    }

    fn insert(&self, property: Property) -> Result<Property> {
        self.properties.write().map_err(lock_poisoned)?.push(property.clone());
        Ok(property)
    }

    fn update(&self, property: Property) -> Result<Property> {
        let mut properties = self.properties.write().map_err(lock_poisoned)?;
        let slot = properties
            .iter_mut()
            .find(|p| p.id == property.id)
            .ok_or_else(|| Error::NotFound(format!("property {}", property.id)))?;
        *slot = property.clone();
        Ok(property)
    }

    fn delete(&self, property_id: &str) -> Result<usize> {
        let mut properties = self.properties.write().map_err(lock_poisoned)?;
        let before = properties.len();
        properties.retain(|p| p.id != property_id);
        Ok(before - properties.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poisoned_store_returns_unexpected() {
        let repo = InMemoryPropertyRepository::with_demo_data();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = repo.properties.write().unwrap();
            panic!("writer died");
        }));

        assert!(matches!(repo.list(), Err(Error::Unexpected(_))));
        assert!(matches!(repo.get_by_id("1"), Err(Error::Unexpected(_))));
        assert!(matches!(repo.delete("1"), Err(Error::Unexpected(_))));
    }
}
