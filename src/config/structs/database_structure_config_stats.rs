use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigStats {
    pub table_name: String,
    pub column_game_id: String,
    pub column_game_name: String,
    pub column_total_downloads: String,
    pub column_first_download: String,
    pub column_last_download: String
}
