use async_trait::async_trait;
use crate::database::errors::DatabaseError;
use crate::tracker::structs::download_event::DownloadEvent;
use crate::tracker::structs::game_stats::GameStats;

/// Persistence contract shared by the SQLite and JSON engines.
///
/// The event log is append-only; the aggregate table holds one entry per
/// game. `commit_event` applies both as a single unit so a failed write
/// never leaves an event without its aggregate or vice versa.
#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    async fn append_event(&self, event: &DownloadEvent) -> Result<(), DatabaseError>;

    async fn upsert_stats(&self, stats: &GameStats) -> Result<(), DatabaseError>;

    async fn commit_event(&self, event: &DownloadEvent, stats: &GameStats) -> Result<(), DatabaseError>;

    async fn read_stats(&self, game_id: &str) -> Result<Option<GameStats>, DatabaseError>;

    /// All aggregates, ordered by descending download count.
    async fn read_all_stats(&self) -> Result<Vec<GameStats>, DatabaseError>;

    async fn read_top(&self, limit: u64) -> Result<Vec<GameStats>, DatabaseError>;
}
