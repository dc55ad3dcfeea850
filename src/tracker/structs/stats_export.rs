use serde::{Deserialize, Serialize};
use crate::tracker::structs::game_stats::GameStats;

/// Self-describing snapshot of all aggregates, suitable for archival.
///
/// Field names are stable for downstream consumers.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatsExport {
    pub export_timestamp: i64,
    pub total_games: i64,
    pub total_downloads: i64,
    pub games: Vec<GameStats>,
}
