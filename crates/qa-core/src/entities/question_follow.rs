use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user following a question. Join row between `users` and `questions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionFollow {
    pub id: Option<i64>,
    pub user_id: i64,
    pub question_id: i64,
}

impl QuestionFollow {
    #[must_use]
    pub const fn new(user_id: i64, question_id: i64) -> Self {
        Self {
            id: None,
            user_id,
            question_id,
        }
    }
}
