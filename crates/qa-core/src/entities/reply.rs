use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A reply to a question, optionally nested under another reply.
///
/// Threads are stored by id only (`parent_reply_id`, column `parent_reply`).
/// Replies with no parent are top-level; together they form a forest per
/// question. Acyclicity is a convention, not a storage constraint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Reply {
    pub id: Option<i64>,
    pub body: String,
    pub question_id: i64,
    pub parent_reply_id: Option<i64>,
    pub author_id: i64,
}

impl Reply {
    /// Build an unsaved top-level reply.
    #[must_use]
    pub fn new(body: impl Into<String>, question_id: i64, author_id: i64) -> Self {
        Self {
            id: None,
            body: body.into(),
            question_id,
            parent_reply_id: None,
            author_id,
        }
    }

    /// Build an unsaved reply nested under `parent_reply_id`.
    #[must_use]
    pub fn nested(
        body: impl Into<String>,
        question_id: i64,
        parent_reply_id: i64,
        author_id: i64,
    ) -> Self {
        Self {
            parent_reply_id: Some(parent_reply_id),
            ..Self::new(body, question_id, author_id)
        }
    }

    #[must_use]
    pub const fn is_top_level(&self) -> bool {
        self.parent_reply_id.is_none()
    }
}
