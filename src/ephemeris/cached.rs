//! Thread-safe, memoizing wrapper around any [`Ephemeris`].
//!
//! The wrapped provider is only ever called under a lock, so non-reentrant
//! providers can be shared across threads through a single handle. Results
//! are kept in an LRU cache keyed by `(planet, instant, mode)`; errors are
//! never cached.

use chrono::{DateTime, Utc};
use lru::LruCache;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use super::{CalculationMode, Ephemeris};
use crate::types::Planet;

const FALLBACK_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(n) => n,
    None => unreachable!(),
};

/// Configuration for the longitude cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached longitudes.
    pub max_entries: usize,
    /// Whether to cache at all. When false the wrapper only serializes access.
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
            enabled: true,
        }
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Current number of entries.
    pub len: usize,
    /// Capacity (0 when caching is disabled).
    pub cap: usize,
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups forwarded to the provider.
    pub misses: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    planet: Planet,
    timestamp_ms: i64,
    mode: CalculationMode,
}

struct State<E> {
    provider: E,
    cache: Option<LruCache<CacheKey, f64>>,
    hits: u64,
    misses: u64,
}

/// Serializing, caching ephemeris wrapper.
///
/// # Example
///
/// ```rust,ignore
/// let shared = Arc::new(CachedEphemeris::new(provider));
/// let calc = ChartCalculator::new(Arc::clone(&shared));
/// ```
pub struct CachedEphemeris<E> {
    state: Mutex<State<E>>,
}

impl<E: Ephemeris> CachedEphemeris<E> {
    /// Wrap `provider` with the default cache configuration.
    pub fn new(provider: E) -> Self {
        Self::with_config(provider, CacheConfig::default())
    }

    /// Wrap `provider` with a custom cache configuration.
    pub fn with_config(provider: E, config: CacheConfig) -> Self {
        let cache = config.enabled.then(|| {
            LruCache::new(NonZeroUsize::new(config.max_entries).unwrap_or(FALLBACK_CAPACITY))
        });
        Self {
            state: Mutex::new(State {
                provider,
                cache,
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// Current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        let (len, cap) = state
            .cache
            .as_ref()
            .map(|c| (c.len(), c.cap().get()))
            .unwrap_or((0, 0));
        CacheStats {
            len,
            cap,
            hits: state.hits,
            misses: state.misses,
        }
    }

    /// Drop every cached longitude. Counters are kept.
    pub fn clear(&self) {
        if let Some(cache) = self.state.lock().cache.as_mut() {
            cache.clear();
        }
    }

    /// Unwrap the provider.
    pub fn into_inner(self) -> E {
        self.state.into_inner().provider
    }
}

impl<E: Ephemeris> Ephemeris for CachedEphemeris<E> {
    type Error = E::Error;

    fn longitude(
        &self,
        planet: Planet,
        instant: DateTime<Utc>,
        mode: CalculationMode,
    ) -> Result<f64, Self::Error> {
        let key = CacheKey {
            planet,
            timestamp_ms: instant.timestamp_millis(),
            mode,
        };

        let mut state = self.state.lock();
        let cached = state.cache.as_mut().and_then(|c| c.get(&key).copied());
        if let Some(longitude) = cached {
            state.hits += 1;
            tracing::trace!(%planet, %instant, "ephemeris cache hit");
            return Ok(longitude);
        }

        state.misses += 1;
        tracing::trace!(%planet, %instant, "ephemeris cache miss");
        let longitude = state.provider.longitude(planet, instant, mode)?;
        if let Some(cache) = state.cache.as_mut() {
            cache.put(key, longitude);
        }
        Ok(longitude)
    }
}
