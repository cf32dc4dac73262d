use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    admin_dashboard, admin_dashboard_section, business_page, events_page, home, sign_in_page,
    sign_up_page, tourism_page, user_dashboard,
};

pub fn init_pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/tourism", get(tourism_page))
        .route("/business", get(business_page))
        .route("/events", get(events_page))
        .route("/auth/signin", get(sign_in_page))
        .route("/auth/signup", get(sign_up_page))
        .route("/dashboard", get(admin_dashboard))
        .route("/dashboard/{section}", get(admin_dashboard_section))
        .route("/user-dashboard", get(user_dashboard))
}
