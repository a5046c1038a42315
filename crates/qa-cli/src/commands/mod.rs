pub mod dispatch;
pub mod question;
pub mod reply;
pub mod schema;
pub mod shared;
pub mod user;
