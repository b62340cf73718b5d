use crate::core::state::AppState;
use crate::services::community::{refresh, submit};
use crate::services::outcome::Outcome;
use axum::{
    extract::State,
    response::Redirect,
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

const FEED_ANCHOR: &str = "/#community";

#[derive(Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub text: String,
}

/// Submit a post as the demo user
///
/// POST /community/posts (form: text)
pub async fn submit_post_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PostForm>,
) -> Redirect {
    match submit(&state.feed, &state.session, &state.backend, form.text).await {
        Ok(Outcome::Done(posts)) => info!(posts = posts, "Post accepted"),
        Ok(Outcome::Skipped(reason)) => debug!(reason = %reason, "Post submission skipped"),
        Err(e) => warn!(error = %e, "Post submission failed"),
    }

    Redirect::to(FEED_ANCHOR)
}

/// Reload the feed
///
/// POST /community/refresh
pub async fn refresh_handler(State(state): State<Arc<AppState>>) -> Redirect {
    if let Err(e) = refresh(&state.feed, &state.backend).await {
        warn!(error = %e, "Feed refresh failed");
    }

    Redirect::to(FEED_ANCHOR)
}
