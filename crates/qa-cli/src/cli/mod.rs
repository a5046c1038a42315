use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `qa` binary.
#[derive(Debug, Parser)]
#[command(name = "qa", version, about = "qa - browse a Q&A forum database")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging, including SQL)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file (overrides `database.path` from config)
    #[arg(long, global = true)]
    pub db: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            db: self.db.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{QuestionCommands, ReplyCommands, SchemaCommands, UserCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "qa",
            "--format",
            "raw",
            "--limit",
            "3",
            "--verbose",
            "question",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.limit, Some(3));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Question {
                action: QuestionCommands::List
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["qa", "user", "get", "4", "--quiet", "--db", "forum.db"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.db.as_deref(), Some("forum.db"));
        assert!(matches!(
            cli.command,
            Commands::User {
                action: UserCommands::Get { id: 4 }
            }
        ));
    }

    #[test]
    fn output_format_rejects_table() {
        let parsed = Cli::try_parse_from(["qa", "--format", "table", "user", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn ids_must_be_integers() {
        let parsed = Cli::try_parse_from(["qa", "reply", "get", "abc"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn find_takes_first_and_last_name() {
        let cli = Cli::try_parse_from(["qa", "user", "find", "Ada", "Lovelace"])
            .expect("cli should parse");
        match cli.command {
            Commands::User {
                action: UserCommands::Find { fname, lname },
            } => {
                assert_eq!(fname, "Ada");
                assert_eq!(lname, "Lovelace");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn top_n_flag_is_optional() {
        let cli = Cli::try_parse_from(["qa", "question", "most-liked", "-n", "2"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Question {
                action: QuestionCommands::MostLiked { n: Some(2) }
            }
        ));

        let cli = Cli::try_parse_from(["qa", "question", "most-followed"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Question {
                action: QuestionCommands::MostFollowed { n: None }
            }
        ));
    }

    #[test]
    fn reply_and_schema_subcommands_parse() {
        let cli = Cli::try_parse_from(["qa", "reply", "thread", "9"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Reply {
                action: ReplyCommands::Thread { id: 9 }
            }
        ));

        let cli = Cli::try_parse_from(["qa", "schema", "init"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Schema {
                action: SchemaCommands::Init
            }
        ));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["qa", "--db", "/tmp/forum.db", "user", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.db.as_deref(), Some("/tmp/forum.db"));
        assert_eq!(flags.limit, None);
    }
}
