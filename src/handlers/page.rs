use crate::core::error::PageError;
use crate::core::state::AppState;
use crate::views::page::PageTemplate;
use askama::Template;
use axum::{extract::State, response::Html};
use std::sync::Arc;

/// Render the whole site from current UI state
///
/// GET /
pub async fn page_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let body = PageTemplate::from_state(&state).render()?;
    Ok(Html(body))
}
