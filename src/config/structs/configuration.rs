use serde::{Deserialize, Serialize};
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::mirror_config::MirrorConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub tracker_config: TrackerConfig,
    pub database: DatabaseConfig,
    pub database_structure: DatabaseStructureConfig,
    pub mirror: MirrorConfig,
    pub api_server: Vec<ApiServerConfig>
}
