//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed file and env manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use lore_config::LoreConfig;
use lore_core::enums::TagMatch;
use pretty_assertions::assert_eq;

#[test]
fn loads_store_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
path = "./library.db"
cas_max_attempts = 8
"#,
        )?;

        let config: LoreConfig = Figment::from(Serialized::defaults(LoreConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.store.path, "./library.db");
        assert_eq!(config.store.cas_max_attempts, 8);
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = 50
next_up_window = 3
search_mode = "contains"
"#,
        )?;

        let config: LoreConfig = Figment::from(Serialized::defaults(LoreConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.general.next_up_window, 3);
        assert_eq!(config.general.search_mode, TagMatch::Contains);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\nnext_up_window = 5\n")?;

        let config: LoreConfig = Figment::from(Serialized::defaults(LoreConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.next_up_window, 5);
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.store.cas_max_attempts, 4);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[store]\npath = \"from-toml.db\"\n")?;
        jail.set_env("LORE_STORE__PATH", "from-env.db");

        let config: LoreConfig = Figment::from(Serialized::defaults(LoreConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LORE_").split("__"))
            .extract()?;

        assert_eq!(config.store.path, "from-env.db");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lore")?;
        jail.create_file(".lore/config.toml", "[general]\ndefault_limit = 7\n")?;

        let config = LoreConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn invalid_search_mode_fails() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\nsearch_mode = \"fuzzy\"\n")?;

        let result: Result<LoreConfig, _> =
            Figment::from(Serialized::defaults(LoreConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();

        assert!(result.is_err());
        Ok(())
    });
}
