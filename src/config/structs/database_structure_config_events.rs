use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigEvents {
    pub table_name: String,
    pub column_game_id: String,
    pub column_game_name: String,
    pub column_mod_name: String,
    pub column_timestamp: String,
    pub column_origin: String,
    pub column_user_agent: String
}
