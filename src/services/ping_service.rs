use std::time::Instant;
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::models::PingMetrics;
use crate::services::{QuoteService, WatchlistService};
use crate::utils::{format_uptime, WatchlistError};

pub async fn get_ping_metrics(
    pool: &SqlitePool,
    quotes: &QuoteService,
    watchlist: &WatchlistService,
    started_at: Instant,
) -> Result<PingMetrics, WatchlistError> {
    let database_latency = db::ping(pool).await?;
    let watchlist_size = watchlist.count().await?;
    let cache = quotes.stats().await;

    Ok(PingMetrics {
        uptime: format_uptime(started_at.elapsed()),
        database_latency_ms: database_latency.as_millis() as u64,
        cached_symbols: cache.fresh,
        stale_symbols: cache.entries - cache.fresh,
        watchlist_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::quote_service::tests::{closes, ScriptedProvider};
    use crate::services::quote_service::DEFAULT_CACHE_TTL;

    #[tokio::test]
    async fn test_ping_reports_fresh_cache_entries() {
        let pool = db::memory_pool().await;
        let provider = ScriptedProvider::always(Ok(closes(&[1.0, 2.0])));
        let quotes = QuoteService::new(provider, DEFAULT_CACHE_TTL);
        quotes.get_quote("AAPL").await.unwrap();
        let watchlist = WatchlistService::new(pool.clone());
        watchlist.add("AAPL").await.unwrap();
        watchlist.add("MSFT").await.unwrap();

        let metrics = get_ping_metrics(&pool, &quotes, &watchlist, Instant::now()).await.unwrap();

        assert_eq!(metrics.cached_symbols, 1);
        assert_eq!(metrics.stale_symbols, 0);
        assert_eq!(metrics.watchlist_size, 2);
        assert_eq!(metrics.uptime, "0h 0m 0s");
    }
}
