use serde::{Deserialize, Serialize};

/// Point-in-time copy of the service counters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Stats {
    pub started: i64,
    pub timestamp_last_record: i64,
    pub games: i64,
    pub downloads: i64,
    pub api_handled: i64,
    pub api_not_found: i64,
    pub api_failure: i64,
    pub mirror_updates: i64,
    pub mirror_failures: i64,
}
