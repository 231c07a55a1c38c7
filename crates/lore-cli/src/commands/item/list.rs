use lore_core::enums::{LearningStatus, TagMatch};
use lore_core::responses::ItemListResponse;
use lore_core::views::ItemFilter;
use lore_db::service::LoreService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(args.limit, flags.limit, ctx.config.general.default_limit);
    let response = build_response(args, limit, &ctx.service).await?;
    output(&response, flags.format)
}

/// `total` counts every match; `items` is cut to `limit`.
async fn build_response(
    args: &ListArgs,
    limit: u32,
    service: &LoreService,
) -> anyhow::Result<ItemListResponse> {
    let status = args
        .status
        .as_deref()
        .map(|raw| parse_enum::<LearningStatus>(raw, "status"))
        .transpose()?;

    let filter = match args.search.as_deref() {
        Some(query) => ItemFilter {
            status,
            tag: Some(query.to_string()),
            mode: TagMatch::Text,
        },
        None => service.library_filter(status, args.tag.clone()),
    };

    let mut items = service.filtered_items(&filter).await?;
    let total = u32::try_from(items.len())?;
    items.truncate(usize::try_from(limit)?);

    Ok(ItemListResponse {
        filter,
        items,
        total,
    })
}
