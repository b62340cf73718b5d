use crate::models::id::RecordId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Tags attached to every post submitted from the site
pub const POST_TAGS: [&str; 2] = ["campus", "chai"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: RecordId,
    #[serde(default)]
    pub author_id: Option<RecordId>,
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    /// Creation time exactly as the backend sent it, string or epoch millis
    #[serde(default)]
    pub created_at: Option<Value>,
}

/// `null` and a missing field both read as an empty list
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /api/posts`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub author_id: RecordId,
    pub text: String,
    pub tags: Vec<String>,
}

impl NewPost {
    pub fn tagged(author_id: RecordId, text: String) -> Self {
        Self {
            author_id,
            text,
            tags: POST_TAGS.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}
