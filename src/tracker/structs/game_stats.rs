use serde::{Deserialize, Serialize};

/// Per-game aggregate derived from the event log.
///
/// `total_downloads` always equals the number of events recorded for the
/// game; `first_download` is set once and never changes afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub game_id: String,
    pub game_name: String,
    pub total_downloads: i64,
    pub first_download: i64,
    pub last_download: i64,
}
