use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::database_connector_json::DatabaseConnectorJson;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;

#[derive(Debug, Clone)]
pub struct DatabaseConnector {
    pub(crate) sqlite: Option<DatabaseConnectorSQLite>,
    pub(crate) json: Option<DatabaseConnectorJson>,
    pub(crate) engine: Option<DatabaseDrivers>,
}
