//! Success envelopes.
//!
//! Every successful JSON response shares the `success` flag with the error
//! body rendered by [`crate::AppError`], so clients branch on one field.

use serde::Serialize;

use crate::pagination::PaginationMeta;

/// `{ "success": true, "message"?: ..., "data": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// A page of results plus its [`PaginationMeta`].
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, meta: PaginationMeta) -> Self {
        Self {
            success: true,
            data,
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PaginationParams;

    #[test]
    fn test_ok_omits_message() {
        let json = serde_json::to_value(ApiResponse::ok(42)).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": 42 }));
    }

    #[test]
    fn test_with_message() {
        let json = serde_json::to_value(ApiResponse::with_message("Signed out", ())).unwrap();
        assert_eq!(json["message"], "Signed out");
        assert_eq!(json["success"], true);
    }

    #[test]
    fn test_paginated_carries_meta() {
        let params = PaginationParams {
            page: Some(2),
            limit: Some(2),
        };
        let page = Paginated::new(vec!["c", "d"], PaginationMeta::new(5, &params));
        let json = serde_json::to_value(page).unwrap();
        assert_eq!(json["meta"]["total"], 5);
        assert_eq!(json["meta"]["total_pages"], 3);
        assert_eq!(json["data"][1], "d");
    }
}
