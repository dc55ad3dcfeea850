/// Error taxonomy of the aggregator.
pub mod tracker_error;
