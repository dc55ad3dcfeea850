//! Database backend module.
//!
//! Provides a unified interface over the supported persistence engines:
//! SQLite (via sqlx) and a structured JSON file. Table and column names for
//! the SQLite engine are configurable through `[database_structure]`.
//!
//! The backend owns two collections: the append-only event log and the
//! per-game aggregate table. The aggregator commits an event and its
//! updated aggregate as one unit through `commit_event`.

/// Database engine enumeration.
pub mod enums;

/// Database error types.
pub mod errors;

/// Implementation blocks for the database connectors.
pub mod impls;

/// Database connector data structures.
pub mod structs;

/// Backend contract shared by all engines.
pub mod traits;
