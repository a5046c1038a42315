use anyhow::bail;
use qa_core::entities::User;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::commands::shared::limit::apply_global_limit;
use crate::commands::shared::lookup::require;
use crate::context::AppContext;
use crate::output::output;

/// Handle `qa user`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        UserCommands::List => {
            let mut users = service.all::<User>().await?;
            apply_global_limit(&mut users, flags.limit)?;
            output(&users, flags.format)
        }
        UserCommands::Get { id } => {
            let user = require::<User>(service, *id).await?;
            output(&user, flags.format)
        }
        UserCommands::Find { fname, lname } => {
            let Some(user) = service.find_user_by_name(fname, lname).await? else {
                bail!("no user named '{fname} {lname}'");
            };
            output(&user, flags.format)
        }
        UserCommands::Questions { id } => {
            let mut questions = service.find_questions_by_author_id(*id).await?;
            apply_global_limit(&mut questions, flags.limit)?;
            output(&questions, flags.format)
        }
        UserCommands::Replies { id } => {
            let mut replies = service.find_replies_by_author_id(*id).await?;
            apply_global_limit(&mut replies, flags.limit)?;
            output(&replies, flags.format)
        }
        UserCommands::Followed { id } => {
            let mut questions = service.followed_questions_for_user_id(*id).await?;
            apply_global_limit(&mut questions, flags.limit)?;
            output(&questions, flags.format)
        }
        UserCommands::Liked { id } => {
            let mut questions = service.liked_questions_for_user_id(*id).await?;
            apply_global_limit(&mut questions, flags.limit)?;
            output(&questions, flags.format)
        }
        UserCommands::Karma { id } => {
            let user = require::<User>(service, *id).await?;
            let karma = service.average_karma(&user).await?;
            output(&json!({ "user_id": id, "average_karma": karma }), flags.format)
        }
    }
}
