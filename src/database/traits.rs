/// Contract implemented by every persistence engine.
pub mod database_backend;
