use sqlx::sqlite::SqlitePool;
use chrono::NaiveDateTime;
use crate::models::WatchlistItem;

/// Insert a ticker unless it is already present
/// Returns true when a row was created, false when the ticker already existed
pub async fn insert_ticker(pool: &SqlitePool, ticker: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("INSERT INTO watchlist (ticker) VALUES (?) ON CONFLICT(ticker) DO NOTHING")
        .bind(ticker)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}

/// Delete a ticker
/// Returns true when a row was removed
pub async fn delete_ticker(pool: &SqlitePool, ticker: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM watchlist WHERE ticker = ?")
        .bind(ticker)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Get all rows with their insertion time, most recently added first
pub async fn list_items(pool: &SqlitePool) -> Result<Vec<WatchlistItem>, sqlx::Error> {
    let rows = sqlx::query_as::<_, (String, NaiveDateTime)>(
        "SELECT ticker, added_on FROM watchlist ORDER BY added_on DESC, id DESC"
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(ticker, added_on)| WatchlistItem { ticker, added_on })
        .collect())
}

/// Count watchlist rows
pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM watchlist")
        .fetch_one(pool)
        .await
}
