use std::sync::atomic::Ordering;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::download_tracker::DownloadTracker;

impl DownloadTracker {
    pub fn get_service_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            timestamp_last_record: self.stats.timestamp_last_record.load(Ordering::SeqCst),
            games: self.stats.games.load(Ordering::SeqCst),
            downloads: self.stats.downloads.load(Ordering::SeqCst),
            api_handled: self.stats.api_handled.load(Ordering::SeqCst),
            api_not_found: self.stats.api_not_found.load(Ordering::SeqCst),
            api_failure: self.stats.api_failure.load(Ordering::SeqCst),
            mirror_updates: self.stats.mirror_updates.load(Ordering::SeqCst),
            mirror_failures: self.stats.mirror_failures.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        match event {
            StatsEvent::Games => {
                if value > 0 { self.stats.games.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.games.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Downloads => {
                if value > 0 { self.stats.downloads.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.downloads.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::TimestampLastRecord => {
                if value > 0 { self.stats.timestamp_last_record.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.timestamp_last_record.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::ApiHandled => {
                if value > 0 { self.stats.api_handled.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.api_handled.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::ApiNotFound => {
                if value > 0 { self.stats.api_not_found.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.api_not_found.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::ApiFailure => {
                if value > 0 { self.stats.api_failure.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.api_failure.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::MirrorUpdates => {
                if value > 0 { self.stats.mirror_updates.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.mirror_updates.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::MirrorFailures => {
                if value > 0 { self.stats.mirror_failures.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.mirror_failures.fetch_sub(-value, Ordering::SeqCst); }
            }
        }
        self.get_service_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        match event {
            StatsEvent::Games => { self.stats.games.store(value, Ordering::SeqCst); }
            StatsEvent::Downloads => { self.stats.downloads.store(value, Ordering::SeqCst); }
            StatsEvent::TimestampLastRecord => { self.stats.timestamp_last_record.store(value, Ordering::SeqCst); }
            StatsEvent::ApiHandled => { self.stats.api_handled.store(value, Ordering::SeqCst); }
            StatsEvent::ApiNotFound => { self.stats.api_not_found.store(value, Ordering::SeqCst); }
            StatsEvent::ApiFailure => { self.stats.api_failure.store(value, Ordering::SeqCst); }
            StatsEvent::MirrorUpdates => { self.stats.mirror_updates.store(value, Ordering::SeqCst); }
            StatsEvent::MirrorFailures => { self.stats.mirror_failures.store(value, Ordering::SeqCst); }
        }
        self.get_service_stats()
    }
}
