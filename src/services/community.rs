use crate::api::client::BackendClient;
use crate::core::error::BackendError;
use crate::models::post::NewPost;
use crate::services::outcome::{Outcome, SkipReason};
use crate::stores::feed::CommunityFeed;
use crate::stores::session::SessionContext;
use tracing::{debug, info, warn};

/// Fetch every post and replace the displayed feed. Returns the post count.
///
/// On error the displayed feed is untouched.
pub async fn refresh(feed: &CommunityFeed, backend: &BackendClient) -> Result<usize, BackendError> {
    let posts = backend.list_posts().await?;
    let count = posts.len();
    feed.replace_posts(posts);

    debug!(posts = count, "Feed refreshed");
    Ok(count)
}

/// Submit `text` as the demo user, then reload the feed.
///
/// Blank text or an unresolved session is skipped before any request. If
/// the backend rejects the post, the typed text stays in the input and the
/// feed is not reloaded. Once the post is accepted the result is `Done`
/// with the displayed post count, even if the reload fails.
pub async fn submit(
    feed: &CommunityFeed,
    session: &SessionContext,
    backend: &BackendClient,
    text: String,
) -> Result<Outcome<usize>, BackendError> {
    if text.trim().is_empty() {
        feed.set_draft(text);
        return Ok(Outcome::Skipped(SkipReason::EmptyText));
    }

    let Some(user) = session.user() else {
        feed.set_draft(text);
        return Ok(Outcome::Skipped(SkipReason::NoIdentity));
    };

    let post = NewPost::tagged(user.id, text);
    if let Err(e) = backend.create_post(&post).await {
        feed.set_draft(post.text);
        return Err(e);
    }

    info!(author_id = %post.author_id, "Post submitted");
    feed.clear_draft();

    let count = match refresh(feed, backend).await {
        Ok(count) => count,
        Err(e) => {
            warn!(error = %e, "Feed reload after post failed");
            feed.len()
        }
    };
    Ok(Outcome::Done(count))
}
