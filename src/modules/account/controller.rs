//! `/api/user/...`: the signed-in user's own profile and submissions.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use tracing::instrument;
use villagehub_core::{ApiResponse, AppError};
use villagehub_models::business::{Business, UpdateBusinessDto};
use villagehub_models::uploads::UploadResponse;
use villagehub_models::users::User;

use crate::middleware::auth::AuthUser;
use crate::modules::business::service::BusinessService;
use crate::modules::uploads::service::UploadService;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/user/me",
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Account",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = UserService::get(&state.db, identity.user_id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

#[utoipa::path(
    get,
    path = "/api/user/businesses",
    responses(
        (status = 200, description = "Own submissions in every status", body = [Business]),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Account",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_my_businesses(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<ApiResponse<Vec<Business>>>, AppError> {
    let businesses = BusinessService::list_by_owner(&state.db, identity.user_id).await?;
    Ok(Json(ApiResponse::ok(businesses)))
}

#[utoipa::path(
    put,
    path = "/api/user/businesses/{id}",
    params(("id" = i32, Path, description = "Business ID")),
    request_body = UpdateBusinessDto,
    responses(
        (status = 200, description = "Updated and returned to review", body = Business),
        (status = 404, description = "Business not found")
    ),
    tag = "Account",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_my_business(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateBusinessDto>,
) -> Result<Json<ApiResponse<Business>>, AppError> {
    let business = BusinessService::update_owned(&state.db, identity.user_id, id, dto).await?;
    Ok(Json(ApiResponse::with_message(
        "Business updated and sent for review",
        business,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/user/businesses/{id}",
    params(("id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Business deleted"),
        (status = 404, description = "Business not found")
    ),
    tag = "Account",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_my_business(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    BusinessService::delete_owned(&state.db, identity.user_id, id).await?;
    Ok(Json(ApiResponse::with_message("Business deleted", ())))
}

#[utoipa::path(
    post,
    path = "/api/user/upload",
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field"),
    responses(
        (status = 201, description = "File stored", body = UploadResponse),
        (status = 401, description = "Unauthorized"),
        (status = 413, description = "File too large"),
        (status = 422, description = "Unsupported file type")
    ),
    tag = "Account",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, multipart))]
pub async fn upload_my_file(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadResponse>>), AppError> {
    let folder = format!("users/{}", identity.user_id);
    let stored = UploadService::store(state.storage.as_ref(), &folder, multipart).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(stored))))
}
