use crate::core::error::PageError;
use crate::core::state::AppState;
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use std::sync::Arc;
use tracing::debug;

/// Reveal the quote behind easter egg `index`
///
/// POST /eggs/{index}
pub async fn egg_handler(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Redirect, PageError> {
    let egg = state
        .eggs
        .select(index)
        .ok_or_else(|| PageError::NotFound(format!("Easter egg {}", index)))?;

    debug!(index = index, label = %egg.label, "Easter egg opened");
    Ok(Redirect::to("/#eggs"))
}
