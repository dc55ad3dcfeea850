//! REST API and dashboard endpoints.
//!
//! Exposes the aggregator over HTTP: recording downloads, per-game and
//! global statistics, top-N ranking, snapshot export, service counters, a
//! health probe and the HTML dashboard. Handlers only ever call the
//! aggregator; storage is never touched from here.

#[allow(clippy::module_inception)]
pub mod api;

/// POST endpoint recording download events.
pub mod api_downloads;

/// Snapshot export endpoint.
pub mod api_export;

/// Statistics and ranking endpoints.
pub mod api_stats;

/// Server-rendered HTML dashboard.
pub mod dashboard;

/// API data structures.
pub mod structs;
