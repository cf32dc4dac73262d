use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Folders admin uploads may target.
pub const UPLOAD_FOLDERS: [&str; 4] = ["tourism", "business", "events", "general"];

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UploadQuery {
    /// One of `tourism`, `business`, `events`, `general` (default)
    pub folder: Option<String>,
}

impl UploadQuery {
    /// The requested folder, or `None` when it is not one of [`UPLOAD_FOLDERS`].
    pub fn folder(&self) -> Option<&'static str> {
        match self.folder.as_deref().map(str::trim) {
            None | Some("") => Some("general"),
            Some(requested) => UPLOAD_FOLDERS.iter().copied().find(|f| *f == requested),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    /// Public URL the file is served from
    pub url: String,
    /// Storage key, `<folder>/<uuid>.<ext>`
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_defaults_to_general() {
        assert_eq!(UploadQuery::default().folder(), Some("general"));
        let blank = UploadQuery {
            folder: Some(" ".to_string()),
        };
        assert_eq!(blank.folder(), Some("general"));
    }

    #[test]
    fn test_folder_must_be_known() {
        let events = UploadQuery {
            folder: Some("events".to_string()),
        };
        assert_eq!(events.folder(), Some("events"));

        let escape = UploadQuery {
            folder: Some("../etc".to_string()),
        };
        assert_eq!(escape.folder(), None);
    }
}
