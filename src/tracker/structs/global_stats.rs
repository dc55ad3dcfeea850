use serde::{Deserialize, Serialize};

/// Totals across all games, recomputed from the aggregate table on read.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalStats {
    pub total_games: i64,
    pub total_downloads: i64,
    pub last_updated: i64,
}
