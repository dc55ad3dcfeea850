use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use tokio::sync::Mutex;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::game_stats::GameStats;

/// Callback fired with `(game_id, new_total)` after a committed record.
pub type MirrorHook = Box<dyn Fn(&str, i64) -> Result<(), crate::tracker::enums::tracker_error::TrackerError> + Send + Sync>;

pub struct DownloadTracker {
    pub config: Arc<Configuration>,
    pub games_map: Arc<RwLock<BTreeMap<String, GameStats>>>,
    /* Serializes the backend write + in-memory commit of record(). */
    pub write_gate: Arc<Mutex<()>>,
    pub stats: Arc<StatsAtomics>,
    pub mirror: Arc<RwLock<Option<MirrorHook>>>,
    pub database: DatabaseConnector,
}
