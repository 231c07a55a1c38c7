use lore_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Deleting a missing id is not an error; `deleted` reports whether a row went away.
pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let deleted = ctx.service.delete_item(id).await?;
    output(&DeleteResponse { id, deleted }, flags.format)
}
