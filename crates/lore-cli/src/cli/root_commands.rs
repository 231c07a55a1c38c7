use clap::{Args, Subcommand};

use crate::cli::subcommands::BrowseCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Add a learning item.
    Add(AddArgs),
    /// Edit fields of an existing item.
    Edit(EditArgs),
    /// Get an item by id.
    Get { id: i64 },
    /// List library items, newest first.
    List(ListArgs),
    /// Delete an item.
    Delete { id: i64 },
    /// Replace an item's note.
    Note { id: i64, text: String },
    /// Set an item's status (todo, in-progress, done).
    Status { id: i64, status: String },
    /// Advance an item along todo -> in-progress -> done -> todo.
    Toggle { id: i64 },
    /// Start working on an item.
    Start { id: i64 },
    /// Mark an item done.
    Complete { id: i64 },
    /// Reset an item to todo and queue it.
    Queue { id: i64 },
    /// Take an item out of the queue.
    Unqueue { id: i64 },
    /// Tag vocabulary across the library.
    Tags,
    /// Counters plus current, queued, completed and next-up items.
    Dashboard,
    /// Total, done and in-progress counts.
    Summary,
    /// Print a dashboard snapshot now and after every library change.
    Watch(WatchArgs),
    /// Built-in catalog of suggestions.
    Browse {
        #[command(subcommand)]
        action: BrowseCommands,
    },
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `lore add`.
#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub source: String,
    #[arg(long)]
    pub url: Option<String>,
    /// course, video, book or podcast
    #[arg(long)]
    pub category: Option<String>,
    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    /// Due date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub due: Option<String>,
    #[arg(long)]
    pub note: Option<String>,
}

/// Arguments for `lore edit`.
#[derive(Clone, Debug, Args)]
pub struct EditArgs {
    pub id: i64,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub source: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Comma-separated tags; replaces the existing list
    #[arg(long)]
    pub tags: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long, conflicts_with = "clear_due")]
    pub due: Option<String>,
    /// Remove the due date
    #[arg(long)]
    pub clear_due: bool,
    #[arg(long)]
    pub note: Option<String>,
}

/// Arguments for `lore list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub status: Option<String>,
    /// Tag filter using the configured search mode
    #[arg(long, conflicts_with = "search")]
    pub tag: Option<String>,
    /// Substring search over tags, title and source (ignores `search_mode`)
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}

/// Arguments for `lore watch`.
#[derive(Clone, Debug, Args)]
pub struct WatchArgs {
    /// Stop after this many snapshots
    #[arg(long)]
    pub max: Option<u32>,
}

/// Arguments for `lore schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: String,
}
