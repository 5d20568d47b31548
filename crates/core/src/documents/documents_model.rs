//! Document domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{require_non_blank, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    #[default]
    Contract,
    Deed,
    Inspection,
    Mortgage,
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Contract => "contract",
            DocumentType::Deed => "deed",
            DocumentType::Inspection => "inspection",
            DocumentType::Mortgage => "mortgage",
            DocumentType::Other => "other",
        }
    }
}

impl std::str::FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contract" => Ok(DocumentType::Contract),
            "deed" => Ok(DocumentType::Deed),
            "inspection" => Ok(DocumentType::Inspection),
            "mortgage" => Ok(DocumentType::Mortgage),
            "other" => Ok(DocumentType::Other),
            other => Err(format!("unknown document type '{}'", other)),
        }
    }
}

/// Domain model representing a document attached to a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub url: String,
    pub uploaded_by: String,
    pub uploaded_at: DateTime<Utc>,
    pub property_id: String,
    pub is_secure: bool,
}

/// Input model for registering a document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    #[serde(default)]
    pub url: String,
    pub property_id: String,
    #[serde(default = "default_secure")]
    pub is_secure: bool,
}

fn default_secure() -> bool {
    true
}

impl NewDocument {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("name", &self.name)?;
        require_non_blank("propertyId", &self.property_id)?;
        Ok(())
    }
}
