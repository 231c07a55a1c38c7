use crate::cli::GlobalFlags;
use crate::commands::shared::found::require_item;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let item = require_item(ctx.service.get_item(id).await?, id)?;
    output(&item, flags.format)
}
