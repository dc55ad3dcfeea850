//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the tracker
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **tracker_config**: Core tracker settings (service name, default top limit)
//! - **database**: Database engine, path and persistence settings
//! - **database_structure**: Customizable table/column names for the event
//!   log and the aggregate table
//! - **mirror**: Best-effort `modinfo.json` mirroring
//! - **api_server**: REST API server instances
//!
//! # Example
//!
//! ```rust,ignore
//! use neovia_tracker::config::structs::configuration::Configuration;
//!
//! // Load configuration from file
//! let config = Configuration::load_from_file(false)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
#[cfg(test)]
mod tests;
