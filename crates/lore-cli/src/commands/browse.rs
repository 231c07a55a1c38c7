mod add;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BrowseCommands;
use crate::context::AppContext;

/// Handle `lore browse`.
pub async fn handle(
    action: &BrowseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BrowseCommands::List => list::run(ctx, flags).await,
        BrowseCommands::Add { url } => add::run(url, ctx, flags).await,
    }
}
