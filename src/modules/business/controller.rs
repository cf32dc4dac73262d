use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use villagehub_core::{ApiResponse, AppError, Paginated};
use villagehub_models::business::{
    Business, BusinessFilterParams, CreateBusinessDto, ReviewBusinessDto, UpdateBusinessDto,
};

use crate::middleware::auth::{AuthUser, RequireAdmin};
use crate::modules::business::service::BusinessService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/business",
    params(BusinessFilterParams),
    responses((status = 200, description = "Page of approved businesses", body = [Business])),
    tag = "Business"
)]
#[instrument(skip(state))]
pub async fn list_businesses(
    State(state): State<AppState>,
    Query(filters): Query<BusinessFilterParams>,
) -> Result<Json<Paginated<Business>>, AppError> {
    Ok(Json(BusinessService::list_approved(&state.db, &filters).await?))
}

#[utoipa::path(
    get,
    path = "/api/business/{id}",
    params(("id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Approved business", body = Business),
        (status = 404, description = "Business not found or not approved")
    ),
    tag = "Business"
)]
#[instrument(skip(state))]
pub async fn get_business(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Business>>, AppError> {
    Ok(Json(ApiResponse::ok(
        BusinessService::get_approved(&state.db, id).await?,
    )))
}

#[utoipa::path(
    post,
    path = "/api/business",
    request_body = CreateBusinessDto,
    responses(
        (status = 201, description = "Submitted for review (approved immediately for admins)", body = Business),
        (status = 401, description = "Unauthorized - Login required"),
        (status = 422, description = "Validation error")
    ),
    tag = "Business",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_business(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateBusinessDto>,
) -> Result<(StatusCode, Json<ApiResponse<Business>>), AppError> {
    let business =
        BusinessService::create(&state.db, identity.user_id, identity.is_admin(), dto).await?;

    let message = if identity.is_admin() {
        "Business created"
    } else {
        "Business submitted for review"
    };
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(message, business)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/business/{id}",
    params(("id" = i32, Path, description = "Business ID")),
    request_body = UpdateBusinessDto,
    responses(
        (status = 200, description = "Business updated", body = Business),
        (status = 403, description = "Forbidden: Admin access required"),
        (status = 404, description = "Business not found")
    ),
    tag = "Business",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_business(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateBusinessDto>,
) -> Result<Json<ApiResponse<Business>>, AppError> {
    let business = BusinessService::update(&state.db, id, dto).await?;
    Ok(Json(ApiResponse::with_message("Business updated", business)))
}

#[utoipa::path(
    patch,
    path = "/api/business/{id}/status",
    params(("id" = i32, Path, description = "Business ID")),
    request_body = ReviewBusinessDto,
    responses(
        (status = 200, description = "Review recorded", body = Business),
        (status = 403, description = "Forbidden: Admin access required"),
        (status = 404, description = "Business not found")
    ),
    tag = "Business",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn review_business(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<ReviewBusinessDto>,
) -> Result<Json<ApiResponse<Business>>, AppError> {
    let business = BusinessService::review(&state.db, id, dto).await?;
    Ok(Json(ApiResponse::with_message(
        format!("Business marked {}", business.status),
        business,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/business/{id}",
    params(("id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Business deleted"),
        (status = 403, description = "Forbidden: Admin access required"),
        (status = 404, description = "Business not found")
    ),
    tag = "Business",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_business(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    BusinessService::delete(&state.db, id).await?;
    Ok(Json(ApiResponse::with_message("Business deleted", ())))
}
