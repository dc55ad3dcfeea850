pub mod download_tracker;
