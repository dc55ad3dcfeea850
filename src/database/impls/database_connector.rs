use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_json::DatabaseConnectorJson;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::tracker::structs::download_event::DownloadEvent;
use crate::tracker::structs::game_stats::GameStats;

impl DatabaseConnector {
    pub async fn new(config: Arc<Configuration>, create_database: bool) -> DatabaseConnector
    {
        match config.database.engine {
            DatabaseDrivers::sqlite3 => { DatabaseConnectorSQLite::database_connector(config, create_database).await }
            DatabaseDrivers::json => { DatabaseConnectorJson::database_connector(config, create_database).await }
        }
    }

    fn backend(&self) -> Result<&dyn DatabaseBackend, DatabaseError>
    {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => Ok(self.sqlite.as_ref().ok_or(DatabaseError::NoEngine)?),
            Some(DatabaseDrivers::json) => Ok(self.json.as_ref().ok_or(DatabaseError::NoEngine)?),
            None => Err(DatabaseError::NoEngine)
        }
    }

    pub async fn append_event(&self, event: &DownloadEvent) -> Result<(), DatabaseError>
    {
        self.backend()?.append_event(event).await
    }

    pub async fn upsert_stats(&self, stats: &GameStats) -> Result<(), DatabaseError>
    {
        self.backend()?.upsert_stats(stats).await
    }

    pub async fn commit_event(&self, event: &DownloadEvent, stats: &GameStats) -> Result<(), DatabaseError>
    {
        self.backend()?.commit_event(event, stats).await
    }

    pub async fn read_stats(&self, game_id: &str) -> Result<Option<GameStats>, DatabaseError>
    {
        self.backend()?.read_stats(game_id).await
    }

    pub async fn read_all_stats(&self) -> Result<Vec<GameStats>, DatabaseError>
    {
        self.backend()?.read_all_stats().await
    }

    pub async fn read_top(&self, limit: u64) -> Result<Vec<GameStats>, DatabaseError>
    {
        self.backend()?.read_top(limit).await
    }
}
