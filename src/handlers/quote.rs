use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use super::{require_ticker, AppState, HandlerError, HandlerResult};
use crate::models::Quote;
use crate::services::chart_service;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub symbol: String,
    pub price: f64,
    pub change_percent: f64,
    pub history: HistoryResponse,
}

/// Parallel arrays, ready for a charting library
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            history: HistoryResponse {
                dates: quote.dates(),
                prices: quote.prices(),
            },
            symbol: quote.symbol,
            price: quote.price,
            change_percent: quote.change_percent,
        }
    }
}

/// GET /api/quote/{ticker}
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> HandlerResult<Json<QuoteResponse>> {
    require_ticker(&ticker)?;
    let quote = state.quotes.get_quote(&ticker).await?;
    Ok(Json(quote.into()))
}

/// GET /api/quote/{ticker}/chart
pub async fn get_quote_chart(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> HandlerResult<impl IntoResponse> {
    require_ticker(&ticker)?;
    let quote = state.quotes.get_quote(&ticker).await?;
    let svg = chart_service::render_history_svg(
        &quote,
        chart_service::DEFAULT_CHART_WIDTH,
        chart_service::DEFAULT_CHART_HEIGHT,
    )
    .map_err(HandlerError::Internal)?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
