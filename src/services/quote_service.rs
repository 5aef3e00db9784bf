use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use crate::api::QuoteProvider;
use crate::models::{PricePoint, Quote};
use crate::utils::{normalize_ticker, QuoteError};

/// How long a fetched quote is served before the provider is asked again
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

struct CacheEntry {
    quote: Quote,
    created_at: Instant,
}

impl CacheEntry {
    fn is_stale(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}

/// Snapshot of the cache contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub fresh: usize,
}

/// Time-bounded memoization in front of a [`QuoteProvider`].
///
/// Entries are only checked for staleness when read and are never evicted, so
/// the map grows with the number of distinct symbols ever requested. Concurrent
/// misses for the same symbol each call the provider.
pub struct QuoteService {
    provider: Arc<dyn QuoteProvider>,
    ttl: Duration,
    cache: RwLock<HashMap<String, CacheEntry>>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn QuoteProvider>, ttl: Duration) -> Self {
        Self {
            provider,
            ttl,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get the quote for a ticker, from cache when fresh, otherwise from the provider
    pub async fn get_quote(&self, symbol: &str) -> Result<Quote, QuoteError> {
        let symbol = normalize_ticker(symbol);

        if let Some(quote) = self.cached(&symbol).await {
            debug!("Quote cache hit for {}", symbol);
            return Ok(quote);
        }

        debug!("Quote cache miss for {}, calling provider", symbol);
        let fetched_at = Instant::now();

        // The lock is not held here: other symbols keep being served during the round trip
        let history = self.provider.fetch_history(&symbol).await.map_err(|e| {
            warn!("Quote provider failed for {}: {}", symbol, e);
            QuoteError::Provider(e.to_string())
        })?;

        let quote = build_quote(&symbol, history)?;

        self.cache.write().await.insert(
            symbol.clone(),
            CacheEntry {
                quote: quote.clone(),
                created_at: fetched_at,
            },
        );
        info!("Cached {} at {:.2} ({:+.2}%)", symbol, quote.price, quote.change_percent);

        Ok(quote)
    }

    async fn cached(&self, symbol: &str) -> Option<Quote> {
        let cache = self.cache.read().await;
        cache
            .get(symbol)
            .filter(|entry| !entry.is_stale(self.ttl))
            .map(|entry| entry.quote.clone())
    }

    pub async fn stats(&self) -> CacheStats {
        let cache = self.cache.read().await;
        CacheStats {
            entries: cache.len(),
            fresh: cache.values().filter(|e| !e.is_stale(self.ttl)).count(),
        }
    }
}

/// Derive price and daily change from a chronological close series
pub fn build_quote(symbol: &str, history: Vec<PricePoint>) -> Result<Quote, QuoteError> {
    let (previous, latest) = match history.as_slice() {
        [.., previous, latest] => (previous.close, latest.close),
        _ => return Err(QuoteError::NotFound(symbol.to_string())),
    };

    let change_percent = (latest - previous) / previous * 100.0;
    if !change_percent.is_finite() {
        return Err(QuoteError::Provider(format!(
            "Invalid previous close {} for {}",
            previous, symbol
        )));
    }

    Ok(Quote {
        symbol: symbol.to_string(),
        price: latest,
        change_percent,
        history,
    })
}
