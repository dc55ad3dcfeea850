/// Engine-dispatching connector handle.
pub mod database_connector;

/// JSON file connector.
pub mod database_connector_json;

/// SQLite connector.
pub mod database_connector_sqlite;
