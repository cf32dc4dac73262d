use anyhow::anyhow;
use axum::{
    Json,
    extract::{Multipart, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use villagehub_core::{ApiResponse, AppError};
use villagehub_models::uploads::{UploadQuery, UploadResponse};

use crate::middleware::auth::RequireAdmin;
use crate::modules::uploads::service::UploadService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/upload",
    params(UploadQuery),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field"),
    responses(
        (status = 201, description = "File stored", body = UploadResponse),
        (status = 403, description = "Forbidden: Admin access required"),
        (status = 413, description = "File too large"),
        (status = 422, description = "Unsupported file type")
    ),
    tag = "Uploads",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, multipart))]
pub async fn upload(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<UploadQuery>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadResponse>>), AppError> {
    let folder = query
        .folder()
        .ok_or_else(|| AppError::bad_request(anyhow!("Unknown upload folder")))?;

    let stored = UploadService::store(state.storage.as_ref(), folder, multipart).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(stored))))
}
