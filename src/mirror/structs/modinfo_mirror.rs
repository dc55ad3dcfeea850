#[derive(Debug, Clone)]
pub struct ModinfoMirror {
    /// Path to a package's modinfo.json, with `{game_id}` substituted per game.
    pub path_template: String,
}
