//! Tourist spots shown on the public directory and managed from the admin dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;
use villagehub_core::PaginationParams;

use crate::search_term;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TourismSpot {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub location: String,
    pub image_url: Option<String>,
    /// Entry ticket price in rupiah
    pub ticket_price: Option<i64>,
    pub open_hours: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTourismSpotDto {
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
    #[validate(range(min = 0))]
    pub ticket_price: Option<i64>,
    #[validate(length(max = 100))]
    pub open_hours: Option<String>,
}

/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTourismSpotDto {
    #[validate(length(min = 1, max = 150))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
    #[validate(range(min = 0))]
    pub ticket_price: Option<i64>,
    #[validate(length(max = 100))]
    pub open_hours: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TourismFilterParams {
    /// Matches name or location, case-insensitively
    pub search: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl TourismFilterParams {
    pub fn search_pattern(&self) -> Option<String> {
        search_term(self.search.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreateTourismSpotDto {
        CreateTourismSpotDto {
            name: "Air Terjun Sekumpul".to_string(),
            description: "Seven waterfalls in a green canyon".to_string(),
            location: "Sekumpul, Buleleng".to_string(),
            image_url: None,
            ticket_price: Some(20_000),
            open_hours: Some("08:00-17:00".to_string()),
        }
    }

    #[test]
    fn test_create_dto_valid() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_create_dto_rejects_empty_name_and_negative_price() {
        let mut dto = valid_dto();
        dto.name = String::new();
        dto.ticket_price = Some(-1);
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("ticket_price"));
    }

    #[test]
    fn test_update_dto_empty_is_valid() {
        assert!(UpdateTourismSpotDto::default().validate().is_ok());
    }
}
