//! Watchlist models

use chrono::NaiveDateTime;

/// A persisted watchlist row
#[derive(Debug, Clone, PartialEq)]
pub struct WatchlistItem {
    pub ticker: String,
    pub added_on: NaiveDateTime,
}

/// Result of adding a ticker. `inserted` is false when the ticker was already tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub ticker: String,
    pub inserted: bool,
}

/// Result of removing a ticker. `removed` is false when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveOutcome {
    pub ticker: String,
    pub removed: bool,
}
