pub mod database_connector;
pub mod database_connector_json;
pub mod database_connector_sqlite;
