use qa_core::entities::Reply;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReplyCommands;
use crate::commands::shared::limit::apply_global_limit;
use crate::commands::shared::lookup::require;
use crate::context::AppContext;
use crate::output::output;

/// A reply with everything above and below it.
#[derive(Debug, Serialize)]
struct ThreadView {
    ancestors: Vec<Reply>,
    reply: Reply,
    descendants: Vec<Reply>,
}

/// Handle `qa reply`.
pub async fn handle(
    action: &ReplyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        ReplyCommands::Get { id } => {
            let reply = require::<Reply>(service, *id).await?;
            output(&reply, flags.format)
        }
        ReplyCommands::Children { id } => {
            let reply = require::<Reply>(service, *id).await?;
            let mut children = service.child_replies(&reply).await?;
            apply_global_limit(&mut children, flags.limit)?;
            output(&children, flags.format)
        }
        ReplyCommands::Parent { id } => {
            let reply = require::<Reply>(service, *id).await?;
            let parent = service.parent_reply(&reply).await?;
            output(&parent, flags.format)
        }
        ReplyCommands::Thread { id } => {
            let reply = require::<Reply>(service, *id).await?;
            let ancestors = service.reply_ancestors(&reply).await?;
            let descendants = service.reply_descendants(&reply).await?;
            let view = ThreadView {
                ancestors,
                reply,
                descendants,
            };
            output(&view, flags.format)
        }
    }
}
