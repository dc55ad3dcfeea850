/// Supported database engines.
pub mod database_drivers;
