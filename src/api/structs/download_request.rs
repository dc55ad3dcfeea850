use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DownloadRequest {
    pub game_name: String,
    pub mod_name: Option<String>,
}
