use std::sync::Arc;
use sqlx::{Pool, Sqlite};
use crate::config::structs::configuration::Configuration;

#[derive(Debug, Clone)]
pub struct DatabaseConnectorSQLite {
    pub pool: Pool<Sqlite>,
    pub config: Arc<Configuration>,
}
