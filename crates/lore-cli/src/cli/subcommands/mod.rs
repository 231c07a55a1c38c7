mod browse;

pub use browse::BrowseCommands;
