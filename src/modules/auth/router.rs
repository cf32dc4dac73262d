use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{sign_in, sign_out, sign_up};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/signin", post(sign_in))
        .route("/signout", post(sign_out))
}
