use figment::Jail;
use lore_config::{ConfigError, LoreConfig};
use lore_core::enums::TagMatch;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("LORE_STORE__PATH", ":memory:");
        jail.set_env("LORE_GENERAL__SEARCH_MODE", "contains");
        jail.set_env("LORE_GENERAL__NEXT_UP_WINDOW", "4");

        let config = LoreConfig::load().expect("config loads");
        assert!(config.store.is_in_memory());
        assert_eq!(config.general.search_mode, TagMatch::Contains);
        assert_eq!(config.general.next_up_window, 4);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lore")?;
        jail.create_file(".lore/config.toml", "[general]\ndefault_limit = 7\n")?;
        jail.set_env("LORE_GENERAL__DEFAULT_LIMIT", "9");

        let config = LoreConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 9);
        Ok(())
    });
}

#[test]
fn zero_attempts_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("LORE_STORE__CAS_MAX_ATTEMPTS", "0");

        let err = LoreConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "store.cas_max_attempts"));
        Ok(())
    });
}
