//! # VillageHub Models
//!
//! Database rows and request/response DTOs, one module per directory
//! concern:
//!
//! - [`tourism`]: tourist spots
//! - [`business`]: local businesses and their review workflow
//! - [`events`]: village events
//! - [`users`]: accounts
//! - [`auth`]: sign-in and sign-up payloads
//! - [`uploads`]: media upload request and response

pub mod auth;
pub mod business;
pub mod events;
pub mod tourism;
pub mod uploads;
pub mod users;

pub use villagehub_auth::Role;

/// Treats `"true"`/`"1"` (any case) as set; query strings carry flags as text.
pub(crate) fn flag_is_set(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true") | Some("1")
    )
}

/// Trimmed search term, or `None` when blank.
pub(crate) fn search_term(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| format!("%{}%", v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_is_set() {
        assert!(flag_is_set(Some("true")));
        assert!(flag_is_set(Some("TRUE")));
        assert!(flag_is_set(Some("1")));
        assert!(!flag_is_set(Some("false")));
        assert!(!flag_is_set(None));
    }

    #[test]
    fn test_search_term_wraps_for_ilike() {
        assert_eq!(search_term(Some(" pantai ")).as_deref(), Some("%pantai%"));
        assert_eq!(search_term(Some("   ")), None);
        assert_eq!(search_term(None), None);
    }
}
