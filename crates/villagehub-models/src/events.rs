//! Village events (festivals, ceremonies, markets).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};
use villagehub_core::PaginationParams;

use crate::{flag_is_set, search_term};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub image_url: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn check_dates(
    starts_at: DateTime<Utc>,
    ends_at: Option<DateTime<Utc>>,
) -> Result<(), ValidationError> {
    match ends_at {
        Some(end) if end < starts_at => {
            let mut err = ValidationError::new("event_dates");
            err.message = Some("ends_at must not be before starts_at".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

fn validate_create_dates(dto: &CreateEventDto) -> Result<(), ValidationError> {
    check_dates(dto.starts_at, dto.ends_at)
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_create_dates"))]
pub struct CreateEventDto {
    #[validate(length(min = 1, max = 150))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
}

/// Date ordering for partial updates is checked against the stored row.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateEventDto {
    #[validate(length(min = 1, max = 150))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

impl UpdateEventDto {
    /// Applies the update to `current` and checks the resulting date range.
    pub fn merged_dates(
        &self,
        current: &Event,
    ) -> Result<(DateTime<Utc>, Option<DateTime<Utc>>), ValidationError> {
        let starts_at = self.starts_at.unwrap_or(current.starts_at);
        let ends_at = self.ends_at.or(current.ends_at);
        check_dates(starts_at, ends_at)?;
        Ok((starts_at, ends_at))
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventFilterParams {
    pub search: Option<String>,
    /// `true` to list only events that have not ended yet
    pub upcoming: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl EventFilterParams {
    pub fn search_pattern(&self) -> Option<String> {
        search_term(self.search.as_deref())
    }

    pub fn upcoming_only(&self) -> bool {
        flag_is_set(self.upcoming.as_deref())
    }
}
