use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;
use tracing::instrument;
use villagehub_auth::create_token;
use villagehub_config::{AUTH_COOKIE_NAME, JwtConfig};
use villagehub_core::{ApiResponse, AppError};
use villagehub_models::auth::{AuthResponse, SignInRequest, SignUpRequest};

use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

pub fn session_cookie(token: String, jwt_config: &JwtConfig) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE_NAME, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(jwt_config.expiry_seconds))
        .secure(jwt_config.cookie_secure)
        .build()
}

pub fn cleared_cookie(jwt_config: &JwtConfig) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE_NAME, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::ZERO)
        .secure(jwt_config.cookie_secure)
        .build()
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Account created, session cookie set", body = AuthResponse),
        (status = 409, description = "Username or email already registered"),
        (status = 422, description = "Validation error")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn sign_up(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<SignUpRequest>,
) -> Result<(StatusCode, CookieJar, Json<ApiResponse<AuthResponse>>), AppError> {
    let user = AuthService::sign_up(&state.db, dto).await?;
    let token = create_token(&user.identity(), &state.jwt_config)?;

    Ok((
        StatusCode::CREATED,
        jar.add(session_cookie(token, &state.jwt_config)),
        Json(ApiResponse::with_message(
            "Account created",
            AuthResponse { user },
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/signin",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in, session cookie set", body = AuthResponse),
        (status = 401, description = "Invalid username or password")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<SignInRequest>,
) -> Result<(CookieJar, Json<ApiResponse<AuthResponse>>), AppError> {
    let user = AuthService::sign_in(&state.db, dto).await?;
    let token = create_token(&user.identity(), &state.jwt_config)?;

    Ok((
        jar.add(session_cookie(token, &state.jwt_config)),
        Json(ApiResponse::with_message("Signed in", AuthResponse { user })),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/signout",
    responses((status = 200, description = "Session cookie cleared")),
    tag = "Authentication"
)]
pub async fn sign_out(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<()>>) {
    (
        jar.add(cleared_cookie(&state.jwt_config)),
        Json(ApiResponse::with_message("Signed out", ())),
    )
}
