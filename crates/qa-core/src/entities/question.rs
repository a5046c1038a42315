use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A question posted by a user.
///
/// `author_id` is expected to reference a `User`, but storage does not
/// enforce it; author lookups check at the API layer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: Option<i64>,
    pub title: String,
    pub body: String,
    pub author_id: i64,
}

impl Question {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>, author_id: i64) -> Self {
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
            author_id,
        }
    }
}
