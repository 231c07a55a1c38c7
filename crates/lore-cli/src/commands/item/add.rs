use lore_core::entities::ItemDraft;
use lore_core::enums::{LearningCategory, LearningStatus};
use lore_core::lifecycle::parse_tags;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::commands::shared::parse::{parse_due, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &AddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = build_draft(args)?;
    let item = ctx.service.create_item(draft).await?;
    output(&item, flags.format)
}

fn build_draft(args: &AddArgs) -> anyhow::Result<ItemDraft> {
    let mut draft = ItemDraft::new(args.title.as_str(), args.source.as_str());
    if let Some(url) = &args.url {
        draft.url.clone_from(url);
    }
    if let Some(category) = args.category.as_deref() {
        draft.category = parse_enum::<LearningCategory>(category, "category")?;
    }
    if let Some(tags) = args.tags.as_deref() {
        draft.tags = parse_tags(tags);
    }
    if let Some(status) = args.status.as_deref() {
        draft.status = parse_enum::<LearningStatus>(status, "status")?;
    }
    if let Some(due) = args.due.as_deref() {
        draft.due_at = Some(parse_due(due)?);
    }
    draft.note.clone_from(&args.note);
    Ok(draft)
}
