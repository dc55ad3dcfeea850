/// Immutable record of one download.
pub mod download_event;

/// The aggregator itself.
pub mod download_tracker;

/// Per-game aggregate.
pub mod game_stats;

/// Totals across all games.
pub mod global_stats;

/// Result of a successful record call.
pub mod record_outcome;

/// Point-in-time export document.
pub mod stats_export;
