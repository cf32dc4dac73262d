use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use villagehub_core::{ApiResponse, AppError};
use villagehub_models::users::{UpdateUserRoleDto, User};

use crate::middleware::auth::RequireAdmin;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    patch,
    path = "/api/users/{id}/role",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRoleDto,
    responses(
        (status = 200, description = "Role updated", body = User),
        (status = 400, description = "Admins cannot demote themselves"),
        (status = 403, description = "Forbidden: Admin access required"),
        (status = 404, description = "User not found")
    ),
    tag = "Users",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_user_role(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateUserRoleDto>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = UserService::update_role(&state.db, &admin, id, dto.role).await?;
    Ok(Json(ApiResponse::with_message("Role updated", user)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Admins cannot delete themselves"),
        (status = 403, description = "Forbidden: Admin access required"),
        (status = 404, description = "User not found")
    ),
    tag = "Users",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    UserService::delete(&state.db, &admin, id).await?;
    Ok(Json(ApiResponse::with_message("User deleted", ())))
}
