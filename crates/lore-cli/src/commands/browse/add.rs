use lore_core::catalog::{self, BrowseEvent};
use lore_db::service::LoreService;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(url: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let event = import(url, &ctx.service).await?;
    output(&event, flags.format)
}

async fn import(url: &str, service: &LoreService) -> anyhow::Result<BrowseEvent> {
    let url = url.trim();
    let Some(suggestion) = catalog::find_suggestion(url) else {
        anyhow::bail!("no catalog suggestion with url '{url}' (see `lore browse list`)");
    };
    Ok(service.add_to_library(&suggestion).await?)
}
