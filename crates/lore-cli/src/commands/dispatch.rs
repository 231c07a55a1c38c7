use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::commands::lifecycle::Transition;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => commands::item::add::run(&args, ctx, flags).await,
        Commands::Edit(args) => commands::item::edit::run(&args, ctx, flags).await,
        Commands::Get { id } => commands::item::get::run(id, ctx, flags).await,
        Commands::List(args) => commands::item::list::run(&args, ctx, flags).await,
        Commands::Delete { id } => commands::item::delete::run(id, ctx, flags).await,
        Commands::Note { id, text } => commands::lifecycle::note(id, &text, ctx, flags).await,
        Commands::Status { id, status } => {
            commands::lifecycle::set_status(id, &status, ctx, flags).await
        }
        Commands::Toggle { id } => commands::lifecycle::run(id, Transition::Toggle, ctx, flags).await,
        Commands::Start { id } => commands::lifecycle::run(id, Transition::Start, ctx, flags).await,
        Commands::Complete { id } => {
            commands::lifecycle::run(id, Transition::Complete, ctx, flags).await
        }
        Commands::Queue { id } => commands::lifecycle::run(id, Transition::Queue, ctx, flags).await,
        Commands::Unqueue { id } => {
            commands::lifecycle::run(id, Transition::Unqueue, ctx, flags).await
        }
        Commands::Tags => commands::overview::tags(ctx, flags).await,
        Commands::Dashboard => commands::overview::dashboard(ctx, flags).await,
        Commands::Summary => commands::overview::summary(ctx, flags).await,
        Commands::Watch(args) => commands::overview::watch(&args, ctx, flags).await,
        Commands::Browse { action } => commands::browse::handle(&action, ctx, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
