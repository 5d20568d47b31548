use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use super::properties_model::{NewProperty, Property, PropertySearchFilters, PropertyStatus};
use super::properties_traits::{PropertyRepositoryTrait, PropertyServiceTrait};
use crate::constants::PLACEHOLDER_IMAGE;
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};
use crate::users::{AuthServiceTrait, UserRole};

/// Service for browsing and managing listings
pub struct PropertyService {
    repository: Arc<dyn PropertyRepositoryTrait>,
    auth_service: Arc<dyn AuthServiceTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl PropertyService {
    pub fn new(
        repository: Arc<dyn PropertyRepositoryTrait>,
        auth_service: Arc<dyn AuthServiceTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            auth_service,
            event_sink,
        }
    }
}

impl PropertyServiceTrait for PropertyService {
    fn get_properties(&self) -> Result<Vec<Property>> {
        self.repository.list()
    }

    fn get_property(&self, property_id: &str) -> Result<Property> {
        self.repository.get_by_id(property_id)
    }

    fn add_property(&self, new_property: NewProperty) -> Result<Property> {
        let seller = self.auth_service.require_user()?;
        new_property.validate()?;

        let images = if new_property.images.is_empty() {
            vec![PLACEHOLDER_IMAGE.to_string()]
        } else {
            new_property.images
        };

        let property = Property {
            id: Uuid::new_v4().to_string(),
            title: new_property.title.trim().to_string(),
            description: new_property.description,
            price: new_property.price,
            location: new_property.location.trim().to_string(),
            address: new_property.address,
            bedrooms: new_property.bedrooms,
            bathrooms: new_property.bathrooms,
            square_footage: new_property.square_footage,
            images,
            features: new_property.features,
            seller_id: seller.id,
            seller_name: seller.name,
            created_at: Utc::now(),
            status: PropertyStatus::Available,
            property_type: new_property.property_type,
        };

        let created = self.repository.insert(property)?;
        info!("Listed property {} ({})", created.id, created.title);
        self.event_sink
            .emit(DomainEvent::properties_changed(vec![created.id.clone()]));
        Ok(created)
    }

    fn update_property(&self, property: Property) -> Result<Property> {
        let updated = self.repository.update(property)?;
        info!("Updated property {}", updated.id);
        self.event_sink
            .emit(DomainEvent::properties_changed(vec![updated.id.clone()]));
        Ok(updated)
    }

    fn delete_property(&self, property_id: &str) -> Result<()> {
        if self.repository.delete(property_id)? == 0 {
            return Err(Error::NotFound(format!("property {}", property_id)));
        }
        info!("Removed property {}", property_id);
        self.event_sink
            .emit(DomainEvent::properties_changed(vec![property_id.to_string()]));
        Ok(())
    }

    fn search_properties(&self, filters: &PropertySearchFilters) -> Result<Vec<Property>> {
        let matches: Vec<Property> = self
            .repository
            .list()?
            .into_iter()
            .filter(|property| filters.matches(property))
            .collect();
        debug!("Property search {:?} matched {}", filters, matches.len());
        Ok(matches)
    }

    fn user_properties(&self) -> Result<Vec<Property>> {
        match self.auth_service.current_user()? {
            Some(user) if user.role == UserRole::Seller => Ok(self
                .repository
                .list()?
                .into_iter()
                .filter(|property| property.seller_id == user.id)
                .collect()),
            _ => Ok(Vec::new()),
        }
    }
}
