//! Local data caching
//!
//! Caches fetched price history locally to reduce API calls and enable
//! offline reruns.

use chrono::{DateTime, Duration, Utc};
use std::fs;
use std::path::PathBuf;

use crate::core::{HedgeError, HedgeResult, PriceHistory};

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Cache directory
    pub cache_dir: PathBuf,
    /// Maximum age before refresh (in hours)
    pub max_age_hours: i64,
    /// Whether to use cache
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("./data/cache"),
            max_age_hours: 24,
            enabled: true,
        }
    }
}

/// Data cache manager
pub struct DataCache {
    config: CacheConfig,
}

impl DataCache {
    pub fn new(config: CacheConfig) -> HedgeResult<Self> {
        if config.enabled && !config.cache_dir.exists() {
            fs::create_dir_all(&config.cache_dir).map_err(HedgeError::IO)?;
        }

        Ok(Self { config })
    }

    fn cache_key(&self, symbol: &str) -> PathBuf {
        self.config.cache_dir.join(format!("{}_history.json", symbol))
    }

    /// Check if cache is valid (exists and not expired)
    pub fn is_valid(&self, symbol: &str) -> bool {
        if !self.config.enabled {
            return false;
        }

        let path = self.cache_key(symbol);
        if !path.exists() {
            return false;
        }

        if let Ok(metadata) = fs::metadata(&path) {
            if let Ok(modified) = metadata.modified() {
                let modified: DateTime<Utc> = modified.into();
                let age = Utc::now() - modified;
                return age < Duration::hours(self.config.max_age_hours);
            }
        }

        false
    }

    /// Save price history to cache
    pub fn save_history(&self, history: &PriceHistory) -> HedgeResult<()> {
        if !self.config.enabled {
            return Ok(());
        }

        let path = self.cache_key(&history.symbol);
        let json = serde_json::to_string_pretty(history)
            .map_err(|e| HedgeError::Serialization(e.to_string()))?;

        fs::write(&path, json).map_err(HedgeError::IO)?;

        tracing::info!("Cached history for {} at {:?}", history.symbol, path);
        Ok(())
    }

    /// Load price history from cache
    pub fn load_history(&self, symbol: &str) -> HedgeResult<Option<PriceHistory>> {
        if !self.config.enabled || !self.is_valid(symbol) {
            return Ok(None);
        }

        let path = self.cache_key(symbol);
        let json = fs::read_to_string(&path).map_err(HedgeError::IO)?;

        let history: PriceHistory =
            serde_json::from_str(&json).map_err(|e| HedgeError::Serialization(e.to_string()))?;

        tracing::info!("Loaded history for {} from cache", symbol);
        Ok(Some(history))
    }

    /// Clear cache for a symbol
    pub fn clear(&self, symbol: &str) -> HedgeResult<()> {
        let path = self.cache_key(symbol);
        if path.exists() {
            fs::remove_file(&path).map_err(HedgeError::IO)?;
        }
        Ok(())
    }
}

/// Cached data fetcher - combines cache with live fetching
pub struct CachedFetcher {
    cache: DataCache,
    lookback_days: i64,
}

impl CachedFetcher {
    pub fn new(config: CacheConfig, lookback_days: i64) -> HedgeResult<Self> {
        Ok(Self {
            cache: DataCache::new(config)?,
            lookback_days,
        })
    }

    /// Get price history (from cache or fetch)
    pub fn get_history(&self, symbol: &str) -> HedgeResult<PriceHistory> {
        if let Some(history) = self.cache.load_history(symbol)? {
            return Ok(history);
        }

        tracing::info!("Fetching fresh data for {}", symbol);
        let history = super::yahoo::fetch_daily_history(symbol, self.lookback_days)?;

        self.cache.save_history(&history)?;

        Ok(history)
    }

    /// Force refresh (bypass cache)
    pub fn refresh_history(&self, symbol: &str) -> HedgeResult<PriceHistory> {
        self.cache.clear(symbol)?;
        self.get_history(symbol)
    }
}
