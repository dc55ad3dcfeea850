use std::cmp::Ordering;
use crate::tracker::structs::game_stats::GameStats;

impl GameStats {
    /// Ranking order: most downloads first, ties broken by earliest
    /// first download, then by game id for a stable total order.
    pub fn rank_order(a: &GameStats, b: &GameStats) -> Ordering {
        b.total_downloads.cmp(&a.total_downloads)
            .then(a.first_download.cmp(&b.first_download))
            .then(a.game_id.cmp(&b.game_id))
    }
}
