use std::process::exit;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{ConnectOptions, Error, Pool, Row, Sqlite};
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::tracker::structs::download_event::DownloadEvent;
use crate::tracker::structs::game_stats::GameStats;

const LOG_PREFIX: &str = "[SQLite]";

impl DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug")]
    pub async fn create(dsl: &str) -> Result<Pool<Sqlite>, Error> {
        let options = SqliteConnectOptions::from_str(dsl)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        SqlitePoolOptions::new()
            .connect_with(options.create_if_missing(true))
            .await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn database_connector(
        config: Arc<Configuration>,
        create_database: bool,
    ) -> DatabaseConnector {
        let sqlite_connect =
            DatabaseConnectorSQLite::create(config.database.path.as_str()).await;
        if let Err(sqlite_connect) = sqlite_connect {
            error!(
                "{} Unable to connect to SQLite on DSL {}",
                LOG_PREFIX,
                config.database.path
            );
            error!("{} Message: {}", LOG_PREFIX, sqlite_connect);
            exit(1);
        }
        let structure = DatabaseConnector {
            sqlite: Some(DatabaseConnectorSQLite {
                pool: sqlite_connect.unwrap(),
                config: config.clone(),
            }),
            json: None,
            engine: Some(DatabaseDrivers::sqlite3),
        };
        if create_database {
            let pool = &structure.sqlite.as_ref().unwrap().pool;
            info!("[BOOT] Database creation triggered for SQLite.");
            info!("[BOOT SQLite] Setting the PRAGMA config...");
            let _ = sqlx::query("PRAGMA temp_store = memory;")
                .execute(pool)
                .await;
            let _ = sqlx::query("PRAGMA page_size = 32768;")
                .execute(pool)
                .await;
            let _ = sqlx::query("PRAGMA synchronous = full;")
                .execute(pool)
                .await;
            let es = &config.database_structure.events;
            info!("[BOOT SQLite] Creating table {}", es.table_name);
            let query = format!(
                "CREATE TABLE IF NOT EXISTS `{}` (`id` INTEGER PRIMARY KEY AUTOINCREMENT, `{}` TEXT NOT NULL, `{}` TEXT NOT NULL, `{}` TEXT, `{}` INTEGER NOT NULL, `{}` TEXT, `{}` TEXT)",
                es.table_name, es.column_game_id, es.column_game_name, es.column_mod_name, es.column_timestamp, es.column_origin, es.column_user_agent
            );
            if let Err(e) = sqlx::query(&query).execute(pool).await {
                panic!("{} Error: {}", LOG_PREFIX, e);
            }
            let ss = &config.database_structure.stats;
            info!("[BOOT SQLite] Creating table {}", ss.table_name);
            let query = format!(
                "CREATE TABLE IF NOT EXISTS `{}` (`{}` TEXT PRIMARY KEY NOT NULL, `{}` TEXT NOT NULL, `{}` INTEGER DEFAULT 0, `{}` INTEGER, `{}` INTEGER)",
                ss.table_name, ss.column_game_id, ss.column_game_name, ss.column_total_downloads, ss.column_first_download, ss.column_last_download
            );
            if let Err(e) = sqlx::query(&query).execute(pool).await {
                panic!("{} Error: {}", LOG_PREFIX, e);
            }
        }
        structure
    }

    fn event_insert_query(&self) -> String {
        let es = &self.config.database_structure.events;
        format!(
            "INSERT INTO `{}` (`{}`, `{}`, `{}`, `{}`, `{}`, `{}`) VALUES (?, ?, ?, ?, ?, ?)",
            es.table_name, es.column_game_id, es.column_game_name, es.column_mod_name, es.column_timestamp, es.column_origin, es.column_user_agent
        )
    }

    fn stats_upsert_query(&self) -> String {
        let ss = &self.config.database_structure.stats;
        format!(
            "INSERT INTO `{}` (`{}`, `{}`, `{}`, `{}`, `{}`) VALUES (?, ?, ?, ?, ?) ON CONFLICT(`{}`) DO UPDATE SET `{}`=excluded.`{}`, `{}`=excluded.`{}`, `{}`=excluded.`{}`",
            ss.table_name, ss.column_game_id, ss.column_game_name, ss.column_total_downloads, ss.column_first_download, ss.column_last_download,
            ss.column_game_id,
            ss.column_game_name, ss.column_game_name,
            ss.column_total_downloads, ss.column_total_downloads,
            ss.column_last_download, ss.column_last_download
        )
    }

    fn stats_select_query(&self) -> String {
        let ss = &self.config.database_structure.stats;
        format!(
            "SELECT `{}`, `{}`, `{}`, `{}`, `{}` FROM `{}`",
            ss.column_game_id, ss.column_game_name, ss.column_total_downloads, ss.column_first_download, ss.column_last_download, ss.table_name
        )
    }

    fn stats_order_clause(&self) -> String {
        let ss = &self.config.database_structure.stats;
        format!(
            " ORDER BY `{}` DESC, `{}` ASC, `{}` ASC",
            ss.column_total_downloads, ss.column_first_download, ss.column_game_id
        )
    }

    fn row_to_stats(&self, row: &SqliteRow) -> Result<GameStats, Error> {
        let ss = &self.config.database_structure.stats;
        Ok(GameStats {
            game_id: row.try_get::<String, _>(ss.column_game_id.as_str())?,
            game_name: row.try_get::<String, _>(ss.column_game_name.as_str())?,
            total_downloads: row.try_get::<i64, _>(ss.column_total_downloads.as_str())?,
            first_download: row.try_get::<i64, _>(ss.column_first_download.as_str())?,
            last_download: row.try_get::<i64, _>(ss.column_last_download.as_str())?,
        })
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn append_event(&self, event: &DownloadEvent) -> Result<(), DatabaseError>
    {
        sqlx::query(&self.event_insert_query())
            .bind(&event.game_id)
            .bind(&event.game_name)
            .bind(&event.mod_name)
            .bind(event.timestamp)
            .bind(&event.origin)
            .bind(&event.user_agent)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn upsert_stats(&self, stats: &GameStats) -> Result<(), DatabaseError>
    {
        sqlx::query(&self.stats_upsert_query())
            .bind(&stats.game_id)
            .bind(&stats.game_name)
            .bind(stats.total_downloads)
            .bind(stats.first_download)
            .bind(stats.last_download)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn commit_event(&self, event: &DownloadEvent, stats: &GameStats) -> Result<(), DatabaseError>
    {
        let mut transaction = self.pool.begin().await?;
        sqlx::query(&self.event_insert_query())
            .bind(&event.game_id)
            .bind(&event.game_name)
            .bind(&event.mod_name)
            .bind(event.timestamp)
            .bind(&event.origin)
            .bind(&event.user_agent)
            .execute(&mut *transaction)
            .await?;
        sqlx::query(&self.stats_upsert_query())
            .bind(&stats.game_id)
            .bind(&stats.game_name)
            .bind(stats.total_downloads)
            .bind(stats.first_download)
            .bind(stats.last_download)
            .execute(&mut *transaction)
            .await?;
        transaction.commit().await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn read_stats(&self, game_id: &str) -> Result<Option<GameStats>, DatabaseError>
    {
        let ss = &self.config.database_structure.stats;
        let query = format!("{} WHERE `{}` = ?", self.stats_select_query(), ss.column_game_id);
        let row = sqlx::query(&query)
            .bind(game_id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            None => Ok(None),
            Some(row) => Ok(Some(self.row_to_stats(&row)?))
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn read_all_stats(&self) -> Result<Vec<GameStats>, DatabaseError>
    {
        let query = format!("{}{}", self.stats_select_query(), self.stats_order_clause());
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await?;
        let mut stats = Vec::with_capacity(rows.len());
        for row in &rows {
            stats.push(self.row_to_stats(row)?);
        }
        Ok(stats)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn read_top(&self, limit: u64) -> Result<Vec<GameStats>, DatabaseError>
    {
        let query = format!("{}{} LIMIT ?", self.stats_select_query(), self.stats_order_clause());
        let rows = sqlx::query(&query)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;
        let mut stats = Vec::with_capacity(rows.len());
        for row in &rows {
            stats.push(self.row_to_stats(row)?);
        }
        Ok(stats)
    }
}
