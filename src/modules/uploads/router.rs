use axum::{Router, extract::DefaultBodyLimit, routing::post};

use crate::state::AppState;

use super::controller::upload;

/// Room for multipart framing on top of the file itself.
pub const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn init_uploads_router(max_file_size: usize) -> Router<AppState> {
    Router::new()
        .route("/", post(upload))
        .layer(DefaultBodyLimit::max(max_file_size + MULTIPART_OVERHEAD))
}
