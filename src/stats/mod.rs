//! Service statistics module.
//!
//! Process-level counters for tracker activity, stored as atomic integers
//! so worker threads can update them without locking.
//!
//! # Categories
//!
//! - **Core**: known games, total downloads recorded, last record timestamp
//! - **API**: requests handled, not-found responses, failures
//! - **Mirror**: successful and failed modinfo.json syncs
//!
//! # Example
//!
//! ```rust,ignore
//! use neovia_tracker::stats::enums::stats_event::StatsEvent;
//!
//! // Update statistics
//! tracker.update_stats(StatsEvent::ApiHandled, 1);
//!
//! // Read statistics
//! let stats = tracker.get_service_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
