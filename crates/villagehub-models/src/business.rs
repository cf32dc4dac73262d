//! Local businesses.
//!
//! Any signed-in user may submit a business; it stays `PENDING` until an
//! admin reviews it. Only `APPROVED` businesses appear in public listings.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;
use villagehub_core::PaginationParams;

use crate::search_term;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "business_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum BusinessStatus {
    Pending,
    Approved,
    Rejected,
}

impl BusinessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessStatus::Pending => "PENDING",
            BusinessStatus::Approved => "APPROVED",
            BusinessStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for BusinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Business {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub owner_id: i32,
    pub status: BusinessStatus,
    /// Admin note left when approving or rejecting
    pub review_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBusinessDto {
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1, max = 50))]
    pub category: String,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    #[validate(length(min = 6, max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBusinessDto {
    #[validate(length(min = 1, max = 150))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,
    #[validate(length(min = 6, max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ReviewBusinessDto {
    pub status: BusinessStatus,
    #[validate(length(max = 500))]
    pub review_note: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BusinessFilterParams {
    /// Matches name or description, case-insensitively
    pub search: Option<String>,
    /// Exact category, e.g. `kuliner` or `kerajinan`
    pub category: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl BusinessFilterParams {
    pub fn search_pattern(&self) -> Option<String> {
        search_term(self.search.as_deref())
    }

    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&BusinessStatus::Approved).unwrap(),
            r#""APPROVED""#
        );
        let parsed: BusinessStatus = serde_json::from_str(r#""REJECTED""#).unwrap();
        assert_eq!(parsed, BusinessStatus::Rejected);
    }

    #[test]
    fn test_review_dto_rejects_unknown_status() {
        let result = serde_json::from_str::<ReviewBusinessDto>(r#"{"status":"MAYBE"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_dto_phone_length() {
        let dto = CreateBusinessDto {
            name: "Warung Made".to_string(),
            description: "Nasi campur".to_string(),
            category: "kuliner".to_string(),
            address: "Jl. Raya Ubud".to_string(),
            phone: Some("12".to_string()),
            image_url: None,
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_filter_category_blank_is_none() {
        let filters = BusinessFilterParams {
            category: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(filters.category(), None);
    }
}
