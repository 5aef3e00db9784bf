use std::sync::Arc;
use std::time::Instant;
use axum::{
    routing::{delete, get},
    Router,
};
use sqlx::sqlite::SqlitePool;
use crate::services::{QuoteService, WatchlistService};

pub mod error;
pub mod ping;
pub mod quote;
pub mod watchlist;

pub use error::{HandlerError, HandlerResult};

/// Shared state handed to every request
pub struct AppState {
    pub quotes: QuoteService,
    pub watchlist: WatchlistService,
    pub pool: SqlitePool,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(quotes: QuoteService, pool: SqlitePool) -> Self {
        Self {
            quotes,
            watchlist: WatchlistService::new(pool.clone()),
            pool,
            started_at: Instant::now(),
        }
    }
}

/// Reject tickers that are empty once surrounding whitespace is dropped
pub(crate) fn require_ticker(ticker: &str) -> HandlerResult<()> {
    if ticker.trim().is_empty() {
        return Err(HandlerError::BadRequest("ticker is required".to_string()));
    }
    Ok(())
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/quote/{ticker}", get(quote::get_quote))
        .route("/api/quote/{ticker}/chart", get(quote::get_quote_chart))
        .route("/api/watchlist", get(watchlist::list).post(watchlist::add))
        .route("/api/watchlist/{ticker}", delete(watchlist::remove))
        .route("/api/ping", get(ping::ping))
        .with_state(state)
}
