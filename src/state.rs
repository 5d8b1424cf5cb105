use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::{DatabaseManager, MemoryTradeRepository, PgTradeRepository, TradeRepository};
use crate::policy::{AclPolicy, Policy};

/// Collaborators shared by every handler, passed in explicitly at startup
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn TradeRepository>,
    pub policy: Arc<dyn Policy>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn TradeRepository>,
        policy: Arc<dyn Policy>,
        config: AppConfig,
    ) -> Self {
        Self {
            repository,
            policy,
            config: Arc::new(config),
        }
    }

    /// In-memory store with the default role policy
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(
            Arc::new(MemoryTradeRepository::new()),
            Arc::new(AclPolicy::default()),
            config,
        )
    }

    /// Postgres store when a database URL is configured, memory otherwise
    pub async fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let repository: Arc<dyn TradeRepository> = if config.database.url.is_some() {
            let pool = DatabaseManager::connect(&config.database).await?;
            Arc::new(PgTradeRepository::new(pool))
        } else {
            tracing::warn!("DATABASE_URL not set, trades are kept in memory");
            Arc::new(MemoryTradeRepository::new())
        };

        Ok(Self::new(repository, Arc::new(AclPolicy::default()), config))
    }
}
