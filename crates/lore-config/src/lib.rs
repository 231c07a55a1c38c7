//! # lore-config
//!
//! Layered configuration loading for Lore using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LORE_*` prefix, `__` as separator)
//! 2. Project-level `.lore/config.toml`
//! 3. User-level `~/.config/lore/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LORE_STORE__PATH` -> `store.path`,
//! `LORE_GENERAL__SEARCH_MODE` -> `general.search_mode`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lore_config::LoreConfig;
//!
//! let config = LoreConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.store.resolved_path().expect("path").display());
//! ```

mod error;
mod general;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::{IN_MEMORY, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use lore_core::enums::TagMatch;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoreConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LoreConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse, or
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".lore/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("LORE_").split("__"))
    }

    /// Reject values that would make the store or views unusable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("store.cas_max_attempts", self.store.cas_max_attempts),
            ("general.default_limit", self.general.default_limit),
            ("general.next_up_window", self.general.next_up_window),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: "must be at least 1".into(),
                });
            }
        }
        if self.general.search_mode == TagMatch::Text {
            return Err(ConfigError::InvalidValue {
                field: "general.search_mode".into(),
                reason: "must be exact or contains".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lore").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = LoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.search_mode, TagMatch::Exact);
    }

    #[test]
    fn zero_window_is_rejected() {
        let mut config = LoreConfig::default();
        config.general.next_up_window = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("general.next_up_window"));
    }

    #[test]
    fn text_search_mode_is_rejected_for_tag_filter() {
        let mut config = LoreConfig::default();
        config.general.search_mode = TagMatch::Text;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("general.search_mode"));

        config.general.search_mode = TagMatch::Contains;
        assert!(config.validate().is_ok());
    }
}
