use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use chrono::Utc;
use log::{info, warn};
use parking_lot::RwLock;
use tokio::sync::Mutex;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::mirror::structs::modinfo_mirror::ModinfoMirror;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::download_event::DownloadEvent;
use crate::tracker::structs::download_tracker::{DownloadTracker, MirrorHook};
use crate::tracker::structs::game_stats::GameStats;
use crate::tracker::structs::global_stats::GlobalStats;
use crate::tracker::structs::record_outcome::RecordOutcome;
use crate::tracker::structs::stats_export::StatsExport;

impl DownloadTracker {
    #[tracing::instrument(level = "debug", skip(config))]
    pub async fn new(config: Arc<Configuration>, create_database: bool) -> DownloadTracker
    {
        let tracker = DownloadTracker {
            config: config.clone(),
            games_map: Arc::new(RwLock::new(BTreeMap::new())),
            write_gate: Arc::new(Mutex::new(())),
            stats: Arc::new(StatsAtomics {
                started: AtomicI64::new(Utc::now().timestamp()),
                ..Default::default()
            }),
            mirror: Arc::new(RwLock::new(None)),
            database: DatabaseConnector::new(config.clone(), create_database).await,
        };
        if config.mirror.enabled {
            tracker.set_mirror(ModinfoMirror::new(config.mirror.path_template.clone()).hook());
        }
        tracker
    }

    pub fn set_mirror(&self, hook: MirrorHook)
    {
        *self.mirror.write() = Some(hook);
    }

    pub fn clear_mirror(&self)
    {
        *self.mirror.write() = None;
    }

    /// Load persisted aggregates into memory at boot.
    pub async fn load_stats(&self)
    {
        match self.database.read_all_stats().await {
            Ok(stats) => {
                let mut downloads = 0;
                let games;
                {
                    let mut games_map = self.games_map.write();
                    for entry in stats {
                        downloads += entry.total_downloads;
                        games_map.insert(entry.game_id.clone(), entry);
                    }
                    games = games_map.len() as i64;
                }
                info!("Loaded {} games with {} downloads.", games, downloads);
                self.set_stats(StatsEvent::Games, games);
                self.set_stats(StatsEvent::Downloads, downloads);
            }
            Err(e) => {
                warn!("[BOOT] Unable to load persisted stats: {}", e);
            }
        }
    }

    /// Record one download event and return the updated aggregate.
    ///
    /// The event and its aggregate are written to the backend before the
    /// in-memory table advances: a storage failure leaves no partial state.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn record(
        &self,
        game_id: &str,
        game_name: &str,
        mod_name: Option<String>,
        origin: Option<String>,
        user_agent: Option<String>,
    ) -> Result<RecordOutcome, TrackerError>
    {
        if game_id.trim().is_empty() {
            return Err(TrackerError::InvalidInput("game_id must not be empty".to_string()));
        }
        if game_name.trim().is_empty() {
            return Err(TrackerError::InvalidInput("game_name must not be empty".to_string()));
        }

        let _guard = self.write_gate.lock().await;

        let timestamp = Utc::now().timestamp();
        let event = DownloadEvent {
            game_id: game_id.to_string(),
            game_name: game_name.to_string(),
            mod_name,
            timestamp,
            origin,
            user_agent,
        };

        let updated = {
            let games_map = self.games_map.read();
            match games_map.get(game_id) {
                None => GameStats {
                    game_id: game_id.to_string(),
                    game_name: game_name.to_string(),
                    total_downloads: 1,
                    first_download: timestamp,
                    last_download: timestamp,
                },
                Some(entry) => {
                    let mut entry = entry.clone();
                    entry.game_name = game_name.to_string();
                    entry.total_downloads += 1;
                    entry.last_download = timestamp;
                    entry
                }
            }
        };

        if self.config.database.persistent {
            self.database.commit_event(&event, &updated).await?;
        }

        let is_new = {
            let mut games_map = self.games_map.write();
            games_map.insert(game_id.to_string(), updated.clone()).is_none()
        };

        if is_new { self.update_stats(StatsEvent::Games, 1); }
        self.update_stats(StatsEvent::Downloads, 1);
        self.set_stats(StatsEvent::TimestampLastRecord, timestamp);

        let mirror_warning = self.run_mirror(&updated);

        Ok(RecordOutcome { stats: updated, mirror_warning })
    }

    fn run_mirror(&self, stats: &GameStats) -> Option<String>
    {
        let mirror = self.mirror.read();
        let hook = mirror.as_ref()?;
        match hook(stats.game_id.as_str(), stats.total_downloads) {
            Ok(()) => {
                self.update_stats(StatsEvent::MirrorUpdates, 1);
                None
            }
            Err(e) => {
                warn!("[MIRROR] Sync for {} failed: {}", stats.game_id, e);
                self.update_stats(StatsEvent::MirrorFailures, 1);
                Some(e.to_string())
            }
        }
    }

    pub fn get_game(&self, game_id: &str) -> Result<GameStats, TrackerError>
    {
        let games_map = self.games_map.read();
        match games_map.get(game_id) {
            None => Err(TrackerError::NotFound(game_id.to_string())),
            Some(entry) => Ok(entry.clone())
        }
    }

    pub fn get_all(&self) -> BTreeMap<String, GameStats>
    {
        self.games_map.read().clone()
    }

    pub fn get_global(&self) -> GlobalStats
    {
        let games_map = self.games_map.read();
        let total_downloads = games_map.values().map(|entry| entry.total_downloads).sum();
        let last_record = self.stats.timestamp_last_record.load(std::sync::atomic::Ordering::SeqCst);
        GlobalStats {
            total_games: games_map.len() as i64,
            total_downloads,
            last_updated: if last_record > 0 { last_record } else { self.stats.started.load(std::sync::atomic::Ordering::SeqCst) },
        }
    }

    /// All aggregates plus the global totals, taken under one read guard.
    ///
    /// The totals are computed from the returned map itself, so they always
    /// match it even while writers are active. Combined read surfaces
    /// (the stats endpoint, the dashboard) go through here instead of
    /// pairing `get_all` with `get_global`.
    pub fn get_all_with_global(&self) -> (GlobalStats, BTreeMap<String, GameStats>)
    {
        let games = self.games_map.read().clone();
        let total_downloads = games.values().map(|entry| entry.total_downloads).sum();
        let last_record = self.stats.timestamp_last_record.load(std::sync::atomic::Ordering::SeqCst);
        let global = GlobalStats {
            total_games: games.len() as i64,
            total_downloads,
            last_updated: if last_record > 0 { last_record } else { self.stats.started.load(std::sync::atomic::Ordering::SeqCst) },
        };
        (global, games)
    }

    /// The `limit` games with the most downloads, in ranking order.
    pub fn top(&self, limit: i64) -> Vec<GameStats>
    {
        if limit <= 0 { return Vec::new(); }
        let mut stats: Vec<GameStats> = self.games_map.read().values().cloned().collect();
        stats.sort_by(GameStats::rank_order);
        stats.truncate(limit as usize);
        stats
    }

    /// Point-in-time copy of all aggregates plus global totals.
    pub fn export_snapshot(&self) -> StatsExport
    {
        let mut games: Vec<GameStats> = self.games_map.read().values().cloned().collect();
        games.sort_by(GameStats::rank_order);
        StatsExport {
            export_timestamp: Utc::now().timestamp(),
            total_games: games.len() as i64,
            total_downloads: games.iter().map(|entry| entry.total_downloads).sum(),
            games,
        }
    }
}
