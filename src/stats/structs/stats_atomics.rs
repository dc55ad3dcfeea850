use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_last_record: AtomicI64,
    pub games: AtomicI64,
    pub downloads: AtomicI64,
    pub api_handled: AtomicI64,
    pub api_not_found: AtomicI64,
    pub api_failure: AtomicI64,
    pub mirror_updates: AtomicI64,
    pub mirror_failures: AtomicI64,
}
