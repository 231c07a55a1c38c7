use std::path::PathBuf;

use anyhow::Context;
use lore_config::LoreConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LoreConfig> {
    load_project_dotenv()?;

    let mut config = LoreConfig::load().context("failed to load lore configuration")?;
    if let Some(db) = &flags.db {
        config.store.path.clone_from(db);
    }
    Ok(config)
}

/// Prefer `.lore/.env` next to the project config, else the usual `.env` lookup.
fn load_project_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path: PathBuf = cwd.join(".lore").join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
