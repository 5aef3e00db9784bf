use sqlx::sqlite::SqlitePool;
use tracing::{debug, info};
use crate::db;
use crate::models::{AddOutcome, RemoveOutcome, WatchlistItem};
use crate::utils::{normalize_ticker, WatchlistError};

/// Persisted, duplicate-free set of tracked tickers
#[derive(Clone)]
pub struct WatchlistService {
    pool: SqlitePool,
}

impl WatchlistService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All tracked tickers, most recently added first
    pub async fn list(&self) -> Result<Vec<WatchlistItem>, WatchlistError> {
        Ok(db::watchlist::list_items(&self.pool).await?)
    }

    pub async fn count(&self) -> Result<i64, WatchlistError> {
        Ok(db::watchlist::count(&self.pool).await?)
    }

    /// Track a ticker. Adding one that is already tracked leaves its original
    /// `added_on` untouched and is still a success.
    pub async fn add(&self, ticker: &str) -> Result<AddOutcome, WatchlistError> {
        let ticker = normalize_ticker(ticker);
        let inserted = db::watchlist::insert_ticker(&self.pool, &ticker).await?;

        if inserted {
            info!("Added {} to watchlist", ticker);
        } else {
            debug!("{} already on watchlist, ignoring", ticker);
        }

        Ok(AddOutcome { ticker, inserted })
    }

    /// Stop tracking a ticker. Removing an absent ticker is a no-op.
    pub async fn remove(&self, ticker: &str) -> Result<RemoveOutcome, WatchlistError> {
        let ticker = normalize_ticker(ticker);
        let removed = db::watchlist::delete_ticker(&self.pool, &ticker).await?;

        if removed {
            info!("Removed {} from watchlist", ticker);
        } else {
            debug!("{} not on watchlist, nothing to remove", ticker);
        }

        Ok(RemoveOutcome { ticker, removed })
    }
}
