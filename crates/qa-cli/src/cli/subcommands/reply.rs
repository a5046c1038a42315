use clap::Subcommand;

/// Reply entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReplyCommands {
    /// Get a reply by ID.
    Get { id: i64 },
    /// Direct answers to a reply.
    Children { id: i64 },
    /// The reply this one answers.
    Parent { id: i64 },
    /// Ancestors and descendants of a reply.
    Thread { id: i64 },
}
