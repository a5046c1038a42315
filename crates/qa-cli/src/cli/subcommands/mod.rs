mod question;
mod reply;
mod schema;
mod user;

pub use question::QuestionCommands;
pub use reply::ReplyCommands;
pub use schema::SchemaCommands;
pub use user::UserCommands;
