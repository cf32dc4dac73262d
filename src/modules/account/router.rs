use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};

use crate::modules::uploads::router::MULTIPART_OVERHEAD;
use crate::state::AppState;

use super::controller::{
    delete_my_business, get_me, list_my_businesses, update_my_business, upload_my_file,
};

pub fn init_account_router(max_file_size: usize) -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/businesses", get(list_my_businesses))
        .route(
            "/businesses/{id}",
            put(update_my_business).delete(delete_my_business),
        )
        .route(
            "/upload",
            post(upload_my_file)
                .layer(DefaultBodyLimit::max(max_file_size + MULTIPART_OVERHEAD)),
        )
}
