use anyhow::Context;
use lore_config::LoreConfig;
use lore_db::service::LoreService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: LoreService,
    pub config: LoreConfig,
}

impl AppContext {
    /// Open the library named by `config`.
    pub async fn init(config: LoreConfig) -> anyhow::Result<Self> {
        let service = LoreService::from_config(&config)
            .await
            .context("failed to initialize lore-db service")?;
        tracing::debug!(path = %config.store.path, "library opened");
        Ok(Self { service, config })
    }

    /// In-memory context for command tests.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let mut config = LoreConfig::default();
        config.store.path = lore_config::IN_MEMORY.to_string();
        Self::init(config).await.expect("in-memory library should open")
    }
}
