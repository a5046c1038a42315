//! Entity structs for the forum tables.
//!
//! Each entity mirrors one row of its table. `id` is `None` until the entity
//! has been persisted. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON output and schema validation.

mod question;
mod question_follow;
mod question_like;
mod reply;
mod user;

pub use question::Question;
pub use question_follow::QuestionFollow;
pub use question_like::QuestionLike;
pub use reply::Reply;
pub use user::User;
