use serde::{Deserialize, Serialize};

/// One recorded download. Created once, appended to the event log,
/// never mutated afterwards.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DownloadEvent {
    pub game_id: String,
    pub game_name: String,
    pub mod_name: Option<String>,
    pub timestamp: i64,
    pub origin: Option<String>,
    pub user_agent: Option<String>,
}
