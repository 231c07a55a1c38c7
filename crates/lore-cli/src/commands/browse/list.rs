use lore_core::responses::CatalogResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let suggestions = ctx.service.list_suggestions().await?;
    output(&CatalogResponse { suggestions }, flags.format)
}
