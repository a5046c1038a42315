use clap::Subcommand;

/// Question entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuestionCommands {
    /// List questions.
    List,
    /// Get a question by ID.
    Get { id: i64 },
    /// All replies on a question, flat.
    Replies { id: i64 },
    /// Users following a question.
    Followers { id: i64 },
    /// Users who liked a question.
    Likers { id: i64 },
    /// Like count for a question.
    Likes { id: i64 },
    /// Questions with the most followers.
    MostFollowed {
        #[arg(short)]
        n: Option<u32>,
    },
    /// Questions with the most likes.
    MostLiked {
        #[arg(short)]
        n: Option<u32>,
    },
}
