use serde::{Deserialize, Serialize};
use crate::tracker::structs::game_stats::GameStats;

/// Post-update aggregate returned by a successful record call.
///
/// A failed modinfo mirror sync never fails the record; it only surfaces
/// here as a warning.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RecordOutcome {
    pub stats: GameStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror_warning: Option<String>,
}
