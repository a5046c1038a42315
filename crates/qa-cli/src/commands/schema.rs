use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SchemaCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `qa schema`.
pub async fn handle(
    action: &SchemaCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SchemaCommands::Init => {
            ctx.service.db().bootstrap_schema().await?;
            tracing::info!(path = %ctx.config.database.path, "schema initialized");
            output(
                &json!({ "initialized": true, "path": ctx.config.database.path }),
                flags.format,
            )
        }
    }
}
