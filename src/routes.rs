use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handlers::health::health_check;
use crate::handlers::trails::{trail_list_page, AppState};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/trails", get(trail_list_page))
        .with_state(app_state)
}
