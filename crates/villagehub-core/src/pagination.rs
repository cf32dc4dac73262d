//! Page-based pagination for list endpoints.
//!
//! Lists take `?page=&limit=` (1-indexed pages, `limit` clamped to 1..=100,
//! default 10) and answer with a [`PaginationMeta`] block:
//!
//! ```json
//! { "total": 42, "page": 2, "limit": 10, "total_pages": 5 }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Query strings arrive as text; an empty value counts as absent.
fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.trim().parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    /// Items per page (1-100, default: 10)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
}

impl PaginationParams {
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(total: i64, params: &PaginationParams) -> Self {
        let limit = params.limit();
        let total = total.max(0);
        Self {
            total,
            page: params.page(),
            limit,
            total_pages: (total + limit - 1) / limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), DEFAULT_LIMIT);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_offset_follows_page() {
        let params = PaginationParams {
            page: Some(3),
            limit: Some(20),
        };
        assert_eq!(params.offset(), 40);
    }

    #[test]
    fn test_limit_is_clamped() {
        let huge = PaginationParams {
            page: None,
            limit: Some(5000),
        };
        assert_eq!(huge.limit(), MAX_LIMIT);

        let zero = PaginationParams {
            page: None,
            limit: Some(0),
        };
        assert_eq!(zero.limit(), 1);
    }

    #[test]
    fn test_non_positive_page_is_first_page() {
        let params = PaginationParams {
            page: Some(-4),
            limit: None,
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_deserialize_from_query_strings() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"page":"2","limit":""}"#).unwrap();
        assert_eq!(params.page(), 2);
        assert_eq!(params.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_meta_total_pages_rounds_up() {
        let params = PaginationParams {
            page: Some(1),
            limit: Some(10),
        };
        assert_eq!(PaginationMeta::new(0, &params).total_pages, 0);
        assert_eq!(PaginationMeta::new(10, &params).total_pages, 1);
        assert_eq!(PaginationMeta::new(11, &params).total_pages, 2);
    }
}
