use qa_core::entities::Question;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuestionCommands;
use crate::commands::shared::limit::{apply_global_limit, effective_limit};
use crate::commands::shared::lookup::require;
use crate::context::AppContext;
use crate::output::output;

/// Handle `qa question`.
pub async fn handle(
    action: &QuestionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    let default_limit = ctx.config.general.default_limit;
    match action {
        QuestionCommands::List => {
            let mut questions = service.all::<Question>().await?;
            apply_global_limit(&mut questions, flags.limit)?;
            output(&questions, flags.format)
        }
        QuestionCommands::Get { id } => {
            let question = require::<Question>(service, *id).await?;
            output(&question, flags.format)
        }
        QuestionCommands::Replies { id } => {
            let mut replies = service.find_replies_by_question_id(*id).await?;
            apply_global_limit(&mut replies, flags.limit)?;
            output(&replies, flags.format)
        }
        QuestionCommands::Followers { id } => {
            let mut users = service.followers_for_question_id(*id).await?;
            apply_global_limit(&mut users, flags.limit)?;
            output(&users, flags.format)
        }
        QuestionCommands::Likers { id } => {
            let mut users = service.likers_for_question_id(*id).await?;
            apply_global_limit(&mut users, flags.limit)?;
            output(&users, flags.format)
        }
        QuestionCommands::Likes { id } => {
            let likes = service.num_likes_for_question_id(*id).await?;
            output(&json!({ "question_id": id, "likes": likes }), flags.format)
        }
        QuestionCommands::MostFollowed { n } => {
            let n = effective_limit(*n, flags.limit, default_limit);
            let questions = service.most_followed(n).await?;
            output(&questions, flags.format)
        }
        QuestionCommands::MostLiked { n } => {
            let n = effective_limit(*n, flags.limit, default_limit);
            let questions = service.most_liked(n).await?;
            output(&questions, flags.format)
        }
    }
}
