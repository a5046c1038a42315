use clap::Subcommand;

use crate::cli::subcommands::{QuestionCommands, ReplyCommands, SchemaCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Database schema management.
    Schema {
        #[command(subcommand)]
        action: SchemaCommands,
    },
    /// Users and what they wrote, followed, and liked.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Questions, their replies, followers, and likes.
    Question {
        #[command(subcommand)]
        action: QuestionCommands,
    },
    /// Replies and reply threads.
    Reply {
        #[command(subcommand)]
        action: ReplyCommands,
    },
}
