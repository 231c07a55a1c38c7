//! General application configuration.

use lore_core::enums::TagMatch;
use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

/// Default size of the dashboard "next up" list.
const fn default_next_up_window() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// How many unfinished items the dashboard shows as "next up".
    #[serde(default = "default_next_up_window")]
    pub next_up_window: u32,

    /// How `lore list --tag` compares the query against items.
    #[serde(default)]
    pub search_mode: TagMatch,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            next_up_window: default_next_up_window(),
            search_mode: TagMatch::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.next_up_window, 10);
        assert_eq!(config.search_mode, TagMatch::Exact);
    }
}
