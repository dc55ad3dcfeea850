use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct DatabaseConnectorJson {
    pub path: String,
    /* Serializes read-modify-write cycles on the backing file. */
    pub file_lock: Arc<Mutex<()>>,
}
