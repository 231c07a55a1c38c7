use clap::Subcommand;

/// Built-in catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BrowseCommands {
    /// List catalog suggestions, marking those already in the library.
    List,
    /// Import a catalog suggestion by url.
    Add { url: String },
}
