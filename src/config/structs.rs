/// API server instance configuration.
pub mod api_server_config;

/// Top-level configuration structure.
pub mod configuration;

/// Database connection configuration.
pub mod database_config;

/// Database table/column naming configuration.
pub mod database_structure_config;

/// Event log table naming.
pub mod database_structure_config_events;

/// Aggregate table naming.
pub mod database_structure_config_stats;

/// Modinfo mirroring configuration.
pub mod mirror_config;

/// Core tracker configuration.
pub mod tracker_config;
