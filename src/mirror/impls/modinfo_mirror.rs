use std::fs;
use std::path::PathBuf;
use log::debug;
use serde_json::Value;
use crate::mirror::structs::modinfo_mirror::ModinfoMirror;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::download_tracker::MirrorHook;

impl ModinfoMirror {
    pub fn new(path_template: String) -> ModinfoMirror {
        ModinfoMirror { path_template }
    }

    pub fn path_for(&self, game_id: &str) -> PathBuf {
        PathBuf::from(self.path_template.replace("{game_id}", game_id))
    }

    /// Write the new download total into the package's modinfo.json.
    pub fn update(&self, game_id: &str, total_downloads: i64) -> Result<(), TrackerError> {
        let path = self.path_for(game_id);
        if !path.exists() {
            return Err(TrackerError::Mirror(format!("no modinfo.json found for {game_id}")));
        }
        let data = fs::read_to_string(&path)
            .map_err(|e| TrackerError::Mirror(format!("{}: {}", path.display(), e)))?;
        let mut modinfo: Value = serde_json::from_str(&data)
            .map_err(|e| TrackerError::Mirror(format!("{}: {}", path.display(), e)))?;
        match modinfo.as_object_mut() {
            None => {
                return Err(TrackerError::Mirror(format!("{}: not a JSON object", path.display())));
            }
            Some(modinfo) => {
                modinfo.insert("downloads".to_string(), Value::from(total_downloads));
            }
        }
        let data = serde_json::to_string_pretty(&modinfo)
            .map_err(|e| TrackerError::Mirror(format!("{}: {}", path.display(), e)))?;
        fs::write(&path, data)
            .map_err(|e| TrackerError::Mirror(format!("{}: {}", path.display(), e)))?;
        debug!("[MIRROR] Updated {}", path.display());
        Ok(())
    }

    pub fn hook(self) -> MirrorHook {
        Box::new(move |game_id, total_downloads| self.update(game_id, total_downloads))
    }
}
