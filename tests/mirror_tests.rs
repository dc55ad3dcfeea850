// Integration tests for the modinfo.json mirror

mod common;

use std::fs;
use std::sync::Arc;
use serde_json::{json, Value};
use tempfile::TempDir;
use neovia_tracker::config::structs::configuration::Configuration;
use neovia_tracker::mirror::structs::modinfo_mirror::ModinfoMirror;
use neovia_tracker::tracker::structs::download_tracker::DownloadTracker;

fn mirror_config(dir: &TempDir) -> Arc<Configuration> {
    let mut config = Configuration::init();
    config.database.persistent = false;
    config.database.path = "sqlite::memory:".to_string();
    config.mirror.enabled = true;
    config.mirror.path_template = format!("{}/UltraGraphicsPack_{{game_id}}/modinfo.json", dir.path().display());
    Arc::new(config)
}

#[test]
fn test_path_for_substitutes_game_id() {
    let mirror = ModinfoMirror::new("mods/UltraGraphicsPack_{game_id}/modinfo.json".to_string());
    assert_eq!(mirror.path_for("TOTK").to_str().unwrap(), "mods/UltraGraphicsPack_TOTK/modinfo.json");
}

#[tokio::test]
async fn test_mirror_updates_modinfo_downloads() {
    let dir = TempDir::new().unwrap();
    let package_dir = dir.path().join("UltraGraphicsPack_TOTK");
    fs::create_dir_all(&package_dir).unwrap();
    let modinfo_path = package_dir.join("modinfo.json");
    fs::write(&modinfo_path, json!({"name": "Ultra Graphics Pack", "downloads": 0}).to_string()).unwrap();

    let tracker = DownloadTracker::new(mirror_config(&dir), false).await;

    let outcome = tracker.record("TOTK", "Zelda: TOTK", None, None, None).await.unwrap();
    assert!(outcome.mirror_warning.is_none());
    let outcome = tracker.record("TOTK", "Zelda: TOTK", None, None, None).await.unwrap();
    assert!(outcome.mirror_warning.is_none());

    let modinfo: Value = serde_json::from_str(&fs::read_to_string(&modinfo_path).unwrap()).unwrap();
    assert_eq!(modinfo["downloads"], 2, "modinfo.json carries the new download total");
    assert_eq!(modinfo["name"], "Ultra Graphics Pack", "existing fields are preserved");

    assert_eq!(tracker.get_service_stats().mirror_updates, 2);
}

#[tokio::test]
async fn test_mirror_failure_does_not_fail_record() {
    let dir = TempDir::new().unwrap();
    // No package directory on disk: every sync fails.
    let tracker = DownloadTracker::new(mirror_config(&dir), false).await;

    let outcome = tracker.record("MC", "Minecraft", None, None, None).await.unwrap();

    assert!(outcome.mirror_warning.is_some(), "failed sync surfaces as a warning");
    assert_eq!(outcome.stats.total_downloads, 1, "the record itself still commits");
    assert_eq!(tracker.get_game("MC").unwrap().total_downloads, 1);
    assert_eq!(tracker.get_service_stats().mirror_failures, 1);
}

#[tokio::test]
async fn test_custom_mirror_hook() {
    let dir = TempDir::new().unwrap();
    let mut config = Configuration::init();
    config.database.persistent = false;
    config.database.path = "sqlite::memory:".to_string();
    config.mirror.enabled = false;
    let tracker = DownloadTracker::new(Arc::new(config), false).await;

    let log_path = dir.path().join("mirror.log");
    let log_path_clone = log_path.clone();
    tracker.set_mirror(Box::new(move |game_id, total| {
        fs::write(&log_path_clone, format!("{game_id}={total}")).unwrap();
        Ok(())
    }));

    tracker.record("TOTK", "Zelda: TOTK", None, None, None).await.unwrap();

    assert_eq!(fs::read_to_string(&log_path).unwrap(), "TOTK=1");

    tracker.clear_mirror();
    let outcome = tracker.record("TOTK", "Zelda: TOTK", None, None, None).await.unwrap();
    assert!(outcome.mirror_warning.is_none());
    assert_eq!(fs::read_to_string(&log_path).unwrap(), "TOTK=1", "cleared hook no longer fires");
}
