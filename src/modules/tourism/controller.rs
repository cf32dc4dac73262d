use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use villagehub_core::{ApiResponse, AppError, Paginated};
use villagehub_models::tourism::{
    CreateTourismSpotDto, TourismFilterParams, TourismSpot, UpdateTourismSpotDto,
};

use crate::middleware::auth::RequireAdmin;
use crate::modules::tourism::service::TourismService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/tourism",
    params(TourismFilterParams),
    responses((status = 200, description = "Page of tourism spots", body = [TourismSpot])),
    tag = "Tourism"
)]
#[instrument(skip(state))]
pub async fn list_spots(
    State(state): State<AppState>,
    Query(filters): Query<TourismFilterParams>,
) -> Result<Json<Paginated<TourismSpot>>, AppError> {
    Ok(Json(TourismService::list(&state.db, &filters).await?))
}

#[utoipa::path(
    get,
    path = "/api/tourism/{id}",
    params(("id" = i32, Path, description = "Tourism spot ID")),
    responses(
        (status = 200, description = "Tourism spot", body = TourismSpot),
        (status = 404, description = "Tourism spot not found")
    ),
    tag = "Tourism"
)]
#[instrument(skip(state))]
pub async fn get_spot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<TourismSpot>>, AppError> {
    let spot = TourismService::get(&state.db, id).await?;
    Ok(Json(ApiResponse::ok(spot)))
}

#[utoipa::path(
    post,
    path = "/api/tourism",
    request_body = CreateTourismSpotDto,
    responses(
        (status = 201, description = "Tourism spot created", body = TourismSpot),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden: Admin access required"),
        (status = 422, description = "Validation error")
    ),
    tag = "Tourism",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_spot(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateTourismSpotDto>,
) -> Result<(StatusCode, Json<ApiResponse<TourismSpot>>), AppError> {
    let spot = TourismService::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Tourism spot created", spot)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/tourism/{id}",
    params(("id" = i32, Path, description = "Tourism spot ID")),
    request_body = UpdateTourismSpotDto,
    responses(
        (status = 200, description = "Tourism spot updated", body = TourismSpot),
        (status = 403, description = "Forbidden: Admin access required"),
        (status = 404, description = "Tourism spot not found")
    ),
    tag = "Tourism",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_spot(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateTourismSpotDto>,
) -> Result<Json<ApiResponse<TourismSpot>>, AppError> {
    let spot = TourismService::update(&state.db, id, dto).await?;
    Ok(Json(ApiResponse::with_message("Tourism spot updated", spot)))
}

#[utoipa::path(
    delete,
    path = "/api/tourism/{id}",
    params(("id" = i32, Path, description = "Tourism spot ID")),
    responses(
        (status = 200, description = "Tourism spot deleted"),
        (status = 403, description = "Forbidden: Admin access required"),
        (status = 404, description = "Tourism spot not found")
    ),
    tag = "Tourism",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_spot(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    TourismService::delete(&state.db, id).await?;
    Ok(Json(ApiResponse::with_message("Tourism spot deleted", ())))
}
