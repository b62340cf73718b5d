use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned record identifier.
///
/// Kept in whatever JSON form the backend used so it can be echoed back
/// unchanged in later requests.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Text(id) => f.write_str(id),
            RecordId::Number(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}
