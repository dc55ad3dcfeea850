use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MirrorConfig {
    pub enabled: bool,
    /// Path to a package's modinfo.json, with `{game_id}` substituted per game.
    pub path_template: String
}
