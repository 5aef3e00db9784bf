use std::sync::Arc;
use axum::{extract::State, Json};
use serde::Serialize;
use super::{AppState, HandlerResult};
use crate::services::ping_service;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    pub uptime: String,
    pub database_latency_ms: u64,
    pub cached_symbols: usize,
    pub stale_symbols: usize,
    pub watchlist_size: i64,
}

/// GET /api/ping
pub async fn ping(State(state): State<Arc<AppState>>) -> HandlerResult<Json<PingResponse>> {
    let metrics =
        ping_service::get_ping_metrics(&state.pool, &state.quotes, &state.watchlist, state.started_at)
            .await?;
    Ok(Json(PingResponse {
        uptime: metrics.uptime,
        database_latency_ms: metrics.database_latency_ms,
        cached_symbols: metrics.cached_symbols,
        stale_symbols: metrics.stale_symbols,
        watchlist_size: metrics.watchlist_size,
    }))
}
