use anyhow::anyhow;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use villagehub_config::CorsConfig;
use villagehub_core::AppError;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::gate::authorization_gate;
use crate::modules::account::init_account_router;
use crate::modules::auth::init_auth_router;
use crate::modules::business::init_business_router;
use crate::modules::events::init_events_router;
use crate::modules::pages::init_pages_router;
use crate::modules::tourism::init_tourism_router;
use crate::modules::uploads::init_uploads_router;
use crate::modules::users::init_users_router;
use crate::state::AppState;

fn cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::COOKIE])
        .allow_credentials(true)
}

async fn not_found() -> AppError {
    AppError::not_found(anyhow!("Not found"))
}

/// Builds the application.
///
/// Every route, the uploads directory and the fallback sit behind the
/// authorization gate; the gate itself skips static asset paths.
pub fn init_router(state: AppState) -> Router {
    let max_upload = state.storage_config.max_file_size;

    let api = Router::new()
        .nest("/auth", init_auth_router())
        .nest("/tourism", init_tourism_router())
        .nest("/business", init_business_router())
        .nest("/events", init_events_router())
        .nest("/users", init_users_router())
        .nest("/user", init_account_router(max_upload))
        .nest("/upload", init_uploads_router(max_upload));

    Router::new()
        .merge(init_pages_router())
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest_service(
            "/uploads",
            ServeDir::new(state.storage_config.upload_dir.clone()),
        )
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(logging_middleware))
                .layer(cors_layer(&state.cors_config))
                .layer(middleware::from_fn_with_state(
                    state.jwt_config.clone(),
                    authorization_gate,
                )),
        )
        .with_state(state)
}

