//! Repository modules for the forum entities.
//!
//! Each module implements [`crate::model::Model`] for its entity and adds
//! finder and association methods to `QaService` via `impl QaService` blocks.

pub mod question;
pub mod question_follow;
pub mod question_like;
pub mod reply;
pub mod user;

/// `questions` columns aliased to their bare names, for joined queries.
pub(crate) const QUESTION_COLUMNS: &str = "questions.id AS id, questions.title AS title, \
     questions.body AS body, questions.author_id AS author_id";

/// `users` columns aliased to their bare names, for joined queries.
pub(crate) const USER_COLUMNS: &str =
    "users.id AS id, users.fname AS fname, users.lname AS lname";
