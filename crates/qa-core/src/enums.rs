//! Entity type enum for the forum.
//!
//! Serialized as `snake_case` via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of entity stored in the forum database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    User,
    Question,
    Reply,
    QuestionFollow,
    QuestionLike,
}

impl EntityType {
    pub const ALL: [Self; 5] = [
        Self::User,
        Self::Question,
        Self::Reply,
        Self::QuestionFollow,
        Self::QuestionLike,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Question => "question",
            Self::Reply => "reply",
            Self::QuestionFollow => "question_follow",
            Self::QuestionLike => "question_like",
        }
    }

    /// Human-facing name used in error messages (`User`, `QuestionFollow`).
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Question => "Question",
            Self::Reply => "Reply",
            Self::QuestionFollow => "QuestionFollow",
            Self::QuestionLike => "QuestionLike",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
