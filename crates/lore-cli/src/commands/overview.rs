use std::time::Duration;

use lore_core::responses::TagsResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WatchArgs;
use crate::context::AppContext;
use crate::output::output;

/// How often `watch` checks the database file for writes from other processes.
const EXTERNAL_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub async fn tags(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tags = ctx.service.distinct_tags().await?;
    output(&TagsResponse { tags }, flags.format)
}

pub async fn dashboard(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.service.dashboard().await?, flags.format)
}

pub async fn summary(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.service.summary().await?, flags.format)
}

/// Print the dashboard, then a fresh snapshot after each change until
/// `--max` snapshots were printed or Ctrl-C.
pub async fn watch(args: &WatchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut live = ctx.service.observe_dashboard();
    let mut poll = tokio::time::interval(EXTERNAL_POLL_INTERVAL);
    let mut printed = 0u32;

    loop {
        tokio::select! {
            snapshot = live.next() => {
                output(&snapshot?, flags.format)?;
                printed += 1;
                if args.max.is_some_and(|max| printed >= max) {
                    break;
                }
            }
            _ = poll.tick() => {
                ctx.service.db().detect_external_changes().await?;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!(printed, "watch interrupted");
                break;
            }
        }
    }
    Ok(())
}
