#![allow(dead_code)]
use std::path::Path;
use std::sync::Arc;
use neovia_tracker::api::structs::api_service_data::ApiServiceData;
use neovia_tracker::config::structs::api_server_config::ApiServerConfig;
use neovia_tracker::config::structs::configuration::Configuration;
use neovia_tracker::database::enums::database_drivers::DatabaseDrivers;
use neovia_tracker::tracker::structs::download_tracker::DownloadTracker;

pub type TestTracker = Arc<DownloadTracker>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config = Configuration::init();
    config.database.path = "sqlite::memory:".to_string();
    config.database.persistent = false;
    config.mirror.enabled = false;
    Arc::new(config)
}

pub fn create_sqlite_config(dir: &Path) -> TestConfig {
    let mut config = Configuration::init();
    config.database.path = format!("sqlite://{}/data.db", dir.display());
    config.database.persistent = true;
    config.mirror.enabled = false;
    Arc::new(config)
}

pub fn create_json_config(dir: &Path) -> TestConfig {
    let mut config = Configuration::init();
    config.database.engine = DatabaseDrivers::json;
    config.database.path = format!("{}/download_stats.json", dir.display());
    config.database.persistent = true;
    config.mirror.enabled = false;
    Arc::new(config)
}

pub fn create_test_api_config() -> Arc<ApiServerConfig> {
    Arc::new(ApiServerConfig {
        enabled: true,
        bind_address: "127.0.0.1:8081".to_string(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        threads: 4,
    })
}

pub async fn create_test_tracker() -> TestTracker {
    let config: TestConfig = create_test_config();
    Arc::new(DownloadTracker::new(config, false).await)
}

pub async fn create_tracker_with_config(config: TestConfig, create_database: bool) -> TestTracker {
    Arc::new(DownloadTracker::new(config, create_database).await)
}

pub async fn create_test_service_data() -> Arc<ApiServiceData> {
    Arc::new(ApiServiceData {
        tracker: create_test_tracker().await,
        api_server_config: create_test_api_config(),
    })
}
