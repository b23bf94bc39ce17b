use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::log;

use crate::LogResult;
use crate::db::Db;
use crate::error::StatsError;
use crate::models::Platform;
use crate::models_api::player_stats::PlayerStats;
use crate::parsing::profile::parse_profile;
use crate::rest_client::{Fetcher, RestFetcher};

pub type SafePlayerStatsService = Arc<PlayerStatsService<RestFetcher>>;

struct StatsCache {
    db: Db<String, PlayerStats>,
    ttl: Duration,
}

pub struct PlayerStatsService<F: Fetcher> {
    fetcher: F,
    cache: Option<StatsCache>,
}

impl<F: Fetcher> PlayerStatsService<F> {
    pub fn new(fetcher: F) -> PlayerStatsService<F> {
        PlayerStatsService { fetcher, cache: None }
    }

    /// Keeps successful lookups under `{db_path}/stats` for `ttl`.
    pub fn with_cache(fetcher: F, db_path: &str, ttl: Duration) -> PlayerStatsService<F> {
        let cache = StatsCache { db: Db::new(db_path, "stats"), ttl };
        PlayerStatsService { fetcher, cache: Some(cache) }
    }

    pub async fn lookup(&self, platform: &str, tag: &str) -> Result<PlayerStats, StatsError> {
        let platform: Platform = platform
            .parse()
            .map_err(|_| StatsError::InvalidPlatform(platform.to_string()))?;
        let key = Self::cache_key(&platform, tag);

        if let Some(stats) = self.read_cached(&key) {
            log::info!("[STATS] Cached {platform}/{tag}");
            return Ok(stats);
        }

        let before = Instant::now();
        let body = self.fetcher.fetch(&platform.profile_path(tag)).await?;
        let stats = parse_profile(&body)?;
        log::info!("[STATS] Lookup {platform}/{tag} {:.2?}", before.elapsed());

        self.write_cached(&key, &stats);
        Ok(stats)
    }

    fn cache_key(platform: &Platform, tag: &str) -> String {
        format!("{platform}_{tag}")
    }

    fn read_cached(&self, key: &String) -> Option<PlayerStats> {
        let cache = self.cache.as_ref()?;
        if cache.db.is_stale(key, Some(cache.ttl)) {
            return None;
        }
        cache.db.read(key)
    }

    fn write_cached(&self, key: &String, stats: &PlayerStats) {
        if let Some(cache) = &self.cache {
            cache.db.write(key, stats).ok_log("[STATS] Cache write failed");
        }
    }
}
