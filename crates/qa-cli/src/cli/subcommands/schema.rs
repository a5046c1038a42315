use clap::Subcommand;

/// Schema commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SchemaCommands {
    /// Create the forum tables if they do not exist.
    Init,
}
