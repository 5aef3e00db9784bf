use thiserror::Error;

/// Failures surfaced by the quote cache service.
///
/// Every upstream failure is folded into one of these two kinds before it
/// leaves the service, so callers never see provider-specific error types.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QuoteError {
    #[error("Ticker '{0}' not found or insufficient data")]
    NotFound(String),
    #[error("{0}")]
    Provider(String),
}

/// Storage failures from the watchlist. Duplicate adds and absent deletes are not errors.
#[derive(Debug, Error)]
pub enum WatchlistError {
    #[error("Database error: {}", extract_clean_error(&.0.to_string()))]
    Database(#[from] sqlx::Error),
}

/// Extract clean error message from database error strings
///
/// Removes the driver prefix from messages like:
/// "error returned from database: (code: 5) database is locked"
///
/// Returns only the meaningful error message:
/// "database is locked"
pub fn extract_clean_error(error_msg: &str) -> String {
    match error_msg.strip_prefix("error returned from database:") {
        Some(rest) => {
            let rest = rest.trim();
            // Drop a leading "(code: N)" marker if present
            match rest.strip_prefix("(code:").and_then(|r| r.split_once(')')) {
                Some((_, message)) => message.trim().to_string(),
                None => rest.to_string(),
            }
        }
        None => error_msg.to_string(),
    }
}
