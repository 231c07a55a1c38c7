//! Item store configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

/// Path value that selects an in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Default compare-and-swap attempts for read-modify-write operations.
const fn default_cas_max_attempts() -> u32 {
    4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Database file path. Empty selects the platform data directory;
    /// `":memory:"` keeps everything in memory.
    #[serde(default)]
    pub path: String,

    /// Attempts before a contended update gives up with a conflict.
    #[serde(default = "default_cas_max_attempts")]
    pub cas_max_attempts: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            cas_max_attempts: default_cas_max_attempts(),
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }

    /// The database location to open.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Unresolvable` when no path is configured and the
    /// platform has no data directory.
    pub fn resolved_path(&self) -> Result<PathBuf, ConfigError> {
        if !self.path.trim().is_empty() {
            return Ok(PathBuf::from(self.path.trim()));
        }
        dirs::data_dir()
            .map(|dir| dir.join("lore").join("library.db"))
            .ok_or_else(|| ConfigError::Unresolvable {
                field: "store.path".into(),
            })
    }
}
