use anyhow::anyhow;
use axum::extract::Multipart;
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;
use villagehub_core::file_storage::extension_for_mime;
use villagehub_core::{AppError, FileStorage, StorageError};
use villagehub_models::uploads::UploadResponse;

const FILE_FIELD: &str = "file";

fn storage_error(err: StorageError) -> AppError {
    let status = match &err {
        StorageError::InvalidFileSize { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        StorageError::InvalidMimeType { .. } | StorageError::EmptyFile => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        StorageError::InvalidKey(_) => StatusCode::BAD_REQUEST,
        StorageError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    AppError::new(status, err)
}

pub struct UploadService;

impl UploadService {
    /// Stores the multipart `file` field under `<folder>/<uuid>.<ext>`.
    #[instrument(skip(storage, multipart))]
    pub async fn store(
        storage: &dyn FileStorage,
        folder: &str,
        mut multipart: Multipart,
    ) -> Result<UploadResponse, AppError> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::new(e.status(), anyhow!(e.body_text())))?
        {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let mime = field.content_type().unwrap_or_default().to_string();
            let content = field
                .bytes()
                .await
                .map_err(|e| AppError::new(e.status(), anyhow!(e.body_text())))?;

            // unknown types get a placeholder extension; save() rejects them
            let extension = extension_for_mime(&mime).unwrap_or("bin");
            let key = format!("{}/{}.{}", folder, Uuid::new_v4(), extension);

            let key = storage
                .save(&key, &content, &mime)
                .await
                .map_err(storage_error)?;
            let url = storage.get_url(&key).map_err(storage_error)?;

            tracing::info!(key = %key, bytes = content.len(), "File uploaded");
            return Ok(UploadResponse { url, key });
        }

        Err(AppError::bad_request(anyhow!("file field is required")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_statuses() {
        assert_eq!(
            storage_error(StorageError::InvalidFileSize { max_bytes: 1 }).status,
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            storage_error(StorageError::EmptyFile).status,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        let io = std::io::Error::other("disk full");
        let err = storage_error(StorageError::IoError(io));
        assert_eq!(err.public_message(), "Internal server error");
    }
}
