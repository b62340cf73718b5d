use crate::models::post::Post;
use crate::utils::sync::lock;
use std::sync::Mutex;

/// What the community section currently shows
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedSnapshot {
    pub posts: Vec<Post>,
    /// Contents of the post input
    pub draft: String,
}

/// In-memory state of the community feed
#[derive(Default)]
pub struct CommunityFeed {
    state: Mutex<FeedSnapshot>,
}

impl CommunityFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed posts in full, keeping backend order
    pub fn replace_posts(&self, posts: Vec<Post>) {
        lock(&self.state).posts = posts;
    }

    pub fn set_draft(&self, draft: String) {
        lock(&self.state).draft = draft;
    }

    pub fn clear_draft(&self) {
        lock(&self.state).draft.clear();
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        lock(&self.state).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.state).posts.len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.state).posts.is_empty()
    }
}
