use lore_core::entities::LearningItem;
use lore_core::enums::LearningStatus;
use lore_db::service::LoreService;

use crate::cli::GlobalFlags;
use crate::commands::shared::found::require_item;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Single-step lifecycle commands that take only an id.
#[derive(Clone, Copy, Debug)]
pub enum Transition {
    Toggle,
    Start,
    Complete,
    Queue,
    Unqueue,
}

pub async fn run(
    id: i64,
    transition: Transition,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let item = apply(id, transition, &ctx.service).await?;
    output(&item, flags.format)
}

async fn apply(
    id: i64,
    transition: Transition,
    service: &LoreService,
) -> anyhow::Result<LearningItem> {
    let item = match transition {
        Transition::Toggle => service.toggle_status(id).await?,
        Transition::Start => service.start_item(id).await?,
        Transition::Complete => service.complete_item(id).await?,
        Transition::Queue => service.move_to_queue(id).await?,
        Transition::Unqueue => service.remove_from_queue(id).await?,
    };
    require_item(item, id)
}

pub async fn set_status(
    id: i64,
    raw: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_enum::<LearningStatus>(raw, "status")?;
    let item = require_item(ctx.service.set_status(id, status).await?, id)?;
    output(&item, flags.format)
}

pub async fn note(id: i64, text: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let item = require_item(ctx.service.update_note(id, text).await?, id)?;
    output(&item, flags.format)
}
