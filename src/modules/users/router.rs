use axum::{
    Router,
    routing::{delete, patch},
};

use crate::state::AppState;

use super::controller::{delete_user, update_user_role};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/{id}", delete(delete_user))
        .route("/{id}/role", patch(update_user_role))
}
