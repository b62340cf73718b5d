use crate::models::id::RecordId;
use serde::{Deserialize, Serialize};

/// A community member as returned by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    /// Unique lookup key, e.g. `@rvu_guest`
    pub handle: String,
    #[serde(default)]
    pub name: String,
    /// Affiliation
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub bio: String,
}

/// Body of `POST /api/users`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub handle: String,
    pub name: String,
    pub university: String,
    pub bio: String,
}
