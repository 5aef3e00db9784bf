pub mod errors;
pub mod ratelimit;

pub use errors::{QuoteError, WatchlistError};
pub use ratelimit::RateLimiter;

/// Normalize a user-supplied ticker: surrounding whitespace is dropped and the
/// symbol is upper-cased, so `aapl` and ` AAPL ` refer to the same ticker.
pub fn normalize_ticker(ticker: &str) -> String {
    ticker.trim().to_uppercase()
}

/// Format an elapsed duration as `Xh Ym Zs`
pub fn format_uptime(elapsed: std::time::Duration) -> String {
    let hours = elapsed.as_secs() / 3600;
    let minutes = (elapsed.as_secs() % 3600) / 60;
    let seconds = elapsed.as_secs() % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}
