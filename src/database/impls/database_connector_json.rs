use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use async_trait::async_trait;
use log::info;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_json::DatabaseConnectorJson;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::tracker::structs::download_event::DownloadEvent;
use crate::tracker::structs::game_stats::GameStats;

const LOG_PREFIX: &str = "[JSON]";

/// On-disk layout of the structured file store.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct JsonStore {
    events: Vec<DownloadEvent>,
    stats: BTreeMap<String, GameStats>,
}

impl DatabaseConnectorJson {
    #[tracing::instrument(level = "debug")]
    pub async fn database_connector(
        config: Arc<Configuration>,
        create_database: bool,
    ) -> DatabaseConnector {
        let connector = DatabaseConnectorJson {
            path: config.database.path.clone(),
            file_lock: Arc::new(Mutex::new(())),
        };
        if create_database && !Path::new(&connector.path).exists() {
            info!("{} Creating store file {}", LOG_PREFIX, connector.path);
            if let Err(e) = connector.store(&JsonStore::default()).await {
                panic!("{} Error: {}", LOG_PREFIX, e);
            }
        }
        DatabaseConnector {
            sqlite: None,
            json: Some(connector),
            engine: Some(DatabaseDrivers::json),
        }
    }

    async fn load(&self) -> Result<JsonStore, DatabaseError> {
        if !Path::new(&self.path).exists() {
            return Ok(JsonStore::default());
        }
        let data = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&data)?)
    }

    /* Write through a temp file so readers never see a half-written store. */
    async fn store(&self, store: &JsonStore) -> Result<(), DatabaseError> {
        let data = serde_json::to_string_pretty(store)?;
        let tmp_path = format!("{}.tmp", self.path);
        tokio::fs::write(&tmp_path, data).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    fn sorted_stats(store: &JsonStore) -> Vec<GameStats> {
        let mut stats: Vec<GameStats> = store.stats.values().cloned().collect();
        stats.sort_by(GameStats::rank_order);
        stats
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorJson {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn append_event(&self, event: &DownloadEvent) -> Result<(), DatabaseError>
    {
        let _guard = self.file_lock.lock().await;
        let mut store = self.load().await?;
        store.events.push(event.clone());
        self.store(&store).await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn upsert_stats(&self, stats: &GameStats) -> Result<(), DatabaseError>
    {
        let _guard = self.file_lock.lock().await;
        let mut store = self.load().await?;
        store.stats.insert(stats.game_id.clone(), stats.clone());
        self.store(&store).await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn commit_event(&self, event: &DownloadEvent, stats: &GameStats) -> Result<(), DatabaseError>
    {
        let _guard = self.file_lock.lock().await;
        let mut store = self.load().await?;
        store.events.push(event.clone());
        store.stats.insert(stats.game_id.clone(), stats.clone());
        self.store(&store).await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn read_stats(&self, game_id: &str) -> Result<Option<GameStats>, DatabaseError>
    {
        let store = self.load().await?;
        Ok(store.stats.get(game_id).cloned())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn read_all_stats(&self) -> Result<Vec<GameStats>, DatabaseError>
    {
        let store = self.load().await?;
        Ok(Self::sorted_stats(&store))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn read_top(&self, limit: u64) -> Result<Vec<GameStats>, DatabaseError>
    {
        let store = self.load().await?;
        let mut stats = Self::sorted_stats(&store);
        stats.truncate(limit as usize);
        Ok(stats)
    }
}
