use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;
use super::{require_ticker, AppState, HandlerError, HandlerResult};
use crate::models::WatchlistItem;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub ticker: String,
    pub added_at: NaiveDateTime,
}

impl From<WatchlistItem> for WatchlistEntry {
    fn from(item: WatchlistItem) -> Self {
        Self {
            ticker: item.ticker,
            added_at: item.added_on,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddRequest {
    pub ticker: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub status: &'static str,
    pub ticker: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
}

/// GET /api/watchlist
pub async fn list(State(state): State<Arc<AppState>>) -> HandlerResult<Json<Vec<WatchlistEntry>>> {
    let items = state.watchlist.list().await?;
    Ok(Json(items.into_iter().map(WatchlistEntry::from).collect()))
}

/// POST /api/watchlist
///
/// Adding a ticker that is already tracked reports success as well.
pub async fn add(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AddRequest>, JsonRejection>,
) -> HandlerResult<Json<AddResponse>> {
    let Json(request) = body.map_err(|e| HandlerError::BadRequest(e.body_text()))?;

    let ticker = request
        .ticker
        .ok_or_else(|| HandlerError::BadRequest("ticker is required".to_string()))?;
    require_ticker(&ticker)?;

    let outcome = state.watchlist.add(&ticker).await?;
    if !outcome.inserted {
        debug!("{} already on the watchlist", outcome.ticker);
    }
    Ok(Json(AddResponse {
        status: "success",
        ticker: outcome.ticker,
    }))
}

/// DELETE /api/watchlist/{ticker}
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> HandlerResult<Json<DeleteResponse>> {
    let outcome = state.watchlist.remove(&ticker).await?;
    if !outcome.removed {
        debug!("{} was not on the watchlist", outcome.ticker);
    }
    Ok(Json(DeleteResponse { status: "deleted" }))
}
