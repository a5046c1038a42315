use clap::Subcommand;

/// User entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users.
    List,
    /// Get a user by ID.
    Get { id: i64 },
    /// Find a user by first and last name.
    Find { fname: String, lname: String },
    /// Questions the user authored.
    Questions { id: i64 },
    /// Replies the user authored.
    Replies { id: i64 },
    /// Questions the user follows.
    Followed { id: i64 },
    /// Questions the user liked.
    Liked { id: i64 },
    /// Average likes per authored question.
    Karma { id: i64 },
}
