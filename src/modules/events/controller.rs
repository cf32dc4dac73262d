use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use villagehub_core::{ApiResponse, AppError, Paginated};
use villagehub_models::events::{CreateEventDto, Event, EventFilterParams, UpdateEventDto};

use crate::middleware::auth::RequireAdmin;
use crate::modules::events::service::EventService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/events",
    params(EventFilterParams),
    responses((status = 200, description = "Page of events ordered by start time", body = [Event])),
    tag = "Events"
)]
#[instrument(skip(state))]
pub async fn list_events(
    State(state): State<AppState>,
    Query(filters): Query<EventFilterParams>,
) -> Result<Json<Paginated<Event>>, AppError> {
    Ok(Json(EventService::list(&state.db, &filters).await?))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event", body = Event),
        (status = 404, description = "Event not found")
    ),
    tag = "Events"
)]
#[instrument(skip(state))]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Event>>, AppError> {
    Ok(Json(ApiResponse::ok(EventService::get(&state.db, id).await?)))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 403, description = "Forbidden: Admin access required"),
        (status = 422, description = "Validation error, e.g. ends_at before starts_at")
    ),
    tag = "Events",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_event(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateEventDto>,
) -> Result<(StatusCode, Json<ApiResponse<Event>>), AppError> {
    let event = EventService::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Event created", event)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(("id" = i32, Path, description = "Event ID")),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 404, description = "Event not found"),
        (status = 422, description = "Resulting dates are out of order")
    ),
    tag = "Events",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_event(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateEventDto>,
) -> Result<Json<ApiResponse<Event>>, AppError> {
    let event = EventService::update(&state.db, id, dto).await?;
    Ok(Json(ApiResponse::with_message("Event updated", event)))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event deleted"),
        (status = 404, description = "Event not found")
    ),
    tag = "Events",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_event(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    EventService::delete(&state.db, id).await?;
    Ok(Json(ApiResponse::with_message("Event deleted", ())))
}
