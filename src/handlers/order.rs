use crate::core::state::AppState;
use crate::services::ordering::{mock_pay, start_order};
use crate::services::outcome::Outcome;
use axum::{
    extract::State,
    response::Redirect,
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

const ORDER_ANCHOR: &str = "/#order";

#[derive(Deserialize)]
pub struct PayForm {
    pub success: bool,
}

/// Create an order for the demo cart
///
/// POST /order/start
pub async fn start_order_handler(State(state): State<Arc<AppState>>) -> Redirect {
    match start_order(&state.orders, &state.session, &state.backend).await {
        Ok(Outcome::Done(_)) => {}
        Ok(Outcome::Skipped(reason)) => debug!(reason = %reason, "Start order skipped"),
        Err(e) => warn!(error = %e, "Start order failed"),
    }

    Redirect::to(ORDER_ANCHOR)
}

/// Settle the tracked order through the mock payment endpoint
///
/// POST /order/pay (form: success=true|false)
pub async fn mock_pay_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PayForm>,
) -> Redirect {
    match mock_pay(&state.orders, &state.backend, form.success).await {
        Ok(Outcome::Done(_)) => {}
        Ok(Outcome::Skipped(reason)) => debug!(reason = %reason, "Mock payment skipped"),
        Err(e) => warn!(error = %e, "Mock payment failed"),
    }

    Redirect::to(ORDER_ANCHOR)
}
