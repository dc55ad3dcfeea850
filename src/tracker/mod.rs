//! Core download aggregator.
//!
//! The `DownloadTracker` owns the per-game aggregate table and funnels
//! every mutation through one atomic record path: validate, append the
//! event and its updated aggregate to the backend, then commit the
//! aggregate to memory. Readers observe a consistent snapshot through the
//! shared read lock; global totals are always recomputed from the
//! aggregate table so they can never drift from it.

/// Tracker error taxonomy.
pub mod enums;

/// Implementation blocks for the aggregator operations.
pub mod impls;

/// Aggregator data structures.
pub mod structs;
