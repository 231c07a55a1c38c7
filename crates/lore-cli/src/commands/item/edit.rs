use lore_core::enums::{LearningCategory, LearningStatus};
use lore_core::lifecycle::parse_tags;
use lore_db::updates::item::{ItemUpdate, ItemUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EditArgs;
use crate::commands::shared::found::require_item;
use crate::commands::shared::parse::{parse_due, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &EditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = build_update(args)?;
    let item = ctx.service.update_item(args.id, &update).await?;
    output(&require_item(item, args.id)?, flags.format)
}

fn build_update(args: &EditArgs) -> anyhow::Result<ItemUpdate> {
    let mut builder = ItemUpdateBuilder::new();
    if let Some(title) = args.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(source) = args.source.as_deref() {
        builder = builder.source(source);
    }
    if let Some(url) = args.url.as_deref() {
        builder = builder.url(url);
    }
    if let Some(category) = args.category.as_deref() {
        builder = builder.category(parse_enum::<LearningCategory>(category, "category")?);
    }
    if let Some(tags) = args.tags.as_deref() {
        builder = builder.tags(parse_tags(tags));
    }
    if let Some(status) = args.status.as_deref() {
        builder = builder.status(parse_enum::<LearningStatus>(status, "status")?);
    }
    if let Some(due) = args.due.as_deref() {
        builder = builder.due_at(Some(parse_due(due)?));
    } else if args.clear_due {
        builder = builder.due_at(None);
    }
    if let Some(note) = args.note.as_deref() {
        builder = builder.note(note);
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!(
            "At least one of --title, --source, --url, --category, --tags, --status, --due, --clear-due or --note must be provided"
        );
    }
    Ok(update)
}
