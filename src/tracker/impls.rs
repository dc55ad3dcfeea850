pub mod download_tracker;
pub mod game_stats;
