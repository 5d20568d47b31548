//! Property listing domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{invalid_input, require_non_blank, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Available,
    Pending,
    Sold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    House,
    Apartment,
    Condo,
    Townhouse,
    Land,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Land => "land",
        }
    }
}

impl std::str::FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "house" => Ok(PropertyType::House),
            "apartment" => Ok(PropertyType::Apartment),
            "condo" => Ok(PropertyType::Condo),
            "townhouse" => Ok(PropertyType::Townhouse),
            "land" => Ok(PropertyType::Land),
            other => Err(format!("unknown property type '{}'", other)),
        }
    }
}

/// Domain model representing a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub location: String,
    pub address: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_footage: u32,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub seller_id: String,
    pub seller_name: String,
    pub created_at: DateTime<Utc>,
    pub status: PropertyStatus,
    pub property_type: PropertyType,
}

/// Input model for listing a property. Id, timestamps, status and seller
/// fields are assigned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub location: String,
    #[serde(default)]
    pub address: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_footage: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub property_type: PropertyType,
}

impl NewProperty {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("title", &self.title)?;
        require_non_blank("location", &self.location)?;
        if self.price < Decimal::ZERO {
            return Err(invalid_input("Price cannot be negative"));
        }
        Ok(())
    }
}

/// Splits a comma separated feature list, dropping blank entries.
pub fn parse_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .map(str::to_string)
        .collect()
}

/// Listing search criteria. Absent (or blank) criteria match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySearchFilters {
    pub location: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// Minimum number of bedrooms.
    pub min_bedrooms: Option<u32>,
    pub property_type: Option<PropertyType>,
}

impl PropertySearchFilters {
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(location) = self.location.as_deref().map(str::trim) {
            if !location.is_empty()
                && !property
                    .location
                    .to_lowercase()
                    .contains(&location.to_lowercase())
            {
                return false;
            }
        }
        if matches!(self.min_price, Some(min) if property.price < min) {
            return false;
        }
        if matches!(self.max_price, Some(max) if property.price > max) {
            return false;
        }
        if matches!(self.min_bedrooms, Some(beds) if property.bedrooms < beds) {
            return false;
        }
        if matches!(self.property_type, Some(kind) if property.property_type != kind) {
            return false;
        }
        true
    }
}
