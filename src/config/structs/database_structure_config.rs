use serde::{Deserialize, Serialize};
use crate::config::structs::database_structure_config_events::DatabaseStructureConfigEvents;
use crate::config::structs::database_structure_config_stats::DatabaseStructureConfigStats;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfig {
    pub events: DatabaseStructureConfigEvents,
    pub stats: DatabaseStructureConfigStats
}
