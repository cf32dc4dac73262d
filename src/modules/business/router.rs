use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use super::controller::{
    create_business, delete_business, get_business, list_businesses, review_business,
    update_business,
};

pub fn init_business_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_businesses).post(create_business))
        .route(
            "/{id}",
            get(get_business)
                .put(update_business)
                .delete(delete_business),
        )
        .route("/{id}/status", patch(review_business))
}
