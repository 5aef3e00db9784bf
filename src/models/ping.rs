//! Ping/status models

/// Service uptime and backing store health
#[derive(Debug)]
pub struct PingMetrics {
    pub uptime: String,
    pub database_latency_ms: u64,
    /// Cache entries still within their TTL
    pub cached_symbols: usize,
    /// Expired entries waiting to be refreshed on next read
    pub stale_symbols: usize,
    pub watchlist_size: i64,
}
