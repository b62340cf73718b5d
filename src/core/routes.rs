// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(crate::handlers::page::page_handler))
        .route("/health", get(crate::handlers::health::health_handler))

        // Community feed actions
        .route("/community/posts", post(crate::handlers::community::submit_post_handler))
        .route("/community/refresh", post(crate::handlers::community::refresh_handler))

        // Order flow actions
        .route("/order/start", post(crate::handlers::order::start_order_handler))
        .route("/order/pay", post(crate::handlers::order::mock_pay_handler))

        .route("/eggs/{index}", post(crate::handlers::eggs::egg_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
