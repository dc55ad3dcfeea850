//! # NEOVIA Mod Download Tracker
//!
//! A small download-statistics service for NEOVIA graphics mod packages,
//! built with Rust and the Actix-web framework.
//!
//! ## Overview
//!
//! The tracker ingests download events for mod packages tied to games and
//! maintains per-game aggregates (total downloads, first/last download
//! timestamps) plus global totals. Statistics are exposed over a REST API
//! and an HTML dashboard, and can be persisted to SQLite or a structured
//! JSON file.
//!
//! ## Features
//!
//! - **Atomic event recording**: concurrent writers never lose updates
//! - **Database agnostic**: SQLite (via sqlx) or JSON file persistence with
//!   customizable table/column names
//! - **Top-N ranking**: deterministic ordering with stable tie-breaks
//! - **JSON export**: point-in-time snapshot of all aggregates
//! - **Modinfo mirroring**: best-effort sync of download counts into
//!   per-package `modinfo.json` files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use neovia_tracker::config::structs::configuration::Configuration;
//! use neovia_tracker::tracker::structs::download_tracker::DownloadTracker;
//!
//! let config = Arc::new(Configuration::init());
//! let tracker = DownloadTracker::new(config, true).await;
//! tracker.record("TOTK", "Zelda: TOTK", None, None, None).await?;
//! ```

/// REST API and dashboard endpoints.
///
/// Provides HTTP endpoints for recording downloads and retrieving per-game,
/// global and service statistics, plus the server-rendered HTML dashboard.
pub mod api;

/// Common utilities and shared functionality.
///
/// Contains logging setup and the small error type used during
/// configuration bootstrap.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
/// Supports customizable database schemas and multiple API server
/// configurations.
pub mod config;

/// Database backend module.
///
/// Provides a unified interface over the SQLite and JSON-file backends with
/// support for custom table and column names.
pub mod database;

/// Best-effort mirroring of download counts into `modinfo.json` files.
pub mod mirror;

/// Service statistics module.
///
/// Collects process-level counters (API requests, mirror syncs, totals)
/// as atomic integers for lock-free concurrent updates.
pub mod stats;

/// CLI argument parsing structures.
pub mod structs;

/// Core download aggregator.
///
/// Contains the `DownloadTracker` with the aggregate table, the event
/// recording path, ranking and export queries.
pub mod tracker;
