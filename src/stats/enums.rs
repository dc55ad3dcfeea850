/// Trackable statistics events.
pub mod stats_event;
