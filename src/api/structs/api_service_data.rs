use std::sync::Arc;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::tracker::structs::download_tracker::DownloadTracker;

pub struct ApiServiceData {
    pub tracker: Arc<DownloadTracker>,
    pub api_server_config: Arc<ApiServerConfig>,
}
