use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_spot, delete_spot, get_spot, list_spots, update_spot};

pub fn init_tourism_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_spots).post(create_spot))
        .route("/{id}", get(get_spot).put(update_spot).delete(delete_spot))
}
