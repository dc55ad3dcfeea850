use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant represents a specific counter that can be incremented,
/// decremented or set. Used with `DownloadTracker::update_stats()` and
/// `DownloadTracker::set_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub enum StatsEvent {
    Games,
    Downloads,
    TimestampLastRecord,
    ApiHandled,
    ApiNotFound,
    ApiFailure,
    MirrorUpdates,
    MirrorFailures,
}
