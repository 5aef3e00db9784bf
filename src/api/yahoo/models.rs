use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use crate::models::PricePoint;

/// Response from the v8 chart endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

/// Error object embedded in the chart body
#[derive(Debug, Clone, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
    /// Unix seconds, one per bar. Missing when the range has no bars.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartMeta {
    /// Exchange offset from UTC in seconds
    #[serde(default)]
    pub gmtoffset: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteIndicator>,
}

/// OHLCV arrays; only closes are used. Holidays and halts come back as null.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteIndicator {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartResponse {
    /// Convert to a chronological daily close series.
    /// An unknown symbol yields an empty series rather than an error.
    pub fn into_price_points(self) -> Result<Vec<PricePoint>, ProviderError> {
        let Chart { result, error } = self.chart;

        if let Some(first) = result.and_then(|r| r.into_iter().next()) {
            return Ok(first.into_price_points());
        }

        match error {
            Some(err) if err.code.eq_ignore_ascii_case("Not Found") => Ok(Vec::new()),
            Some(err) => Err(ProviderError::Upstream(
                err.description.unwrap_or(err.code),
            )),
            None => Ok(Vec::new()),
        }
    }
}

impl ChartResult {
    pub fn into_price_points(self) -> Vec<PricePoint> {
        let offset = self.meta.gmtoffset;
        let closes = self
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close)
            .unwrap_or_default();

        let mut rows: Vec<(NaiveDate, f64)> = self
            .timestamp
            .into_iter()
            .zip(closes)
            .filter_map(|(ts, close)| {
                let close = close.filter(|c| c.is_finite())?;
                let date = DateTime::from_timestamp(ts + offset, 0)?.date_naive();
                Some((date, close))
            })
            .collect();

        // Stable sort keeps upstream order within a day; the last bar of a day wins
        rows.sort_by_key(|(date, _)| *date);

        let mut points: Vec<PricePoint> = Vec::with_capacity(rows.len());
        for (date, close) in rows {
            match points.last_mut() {
                Some(last) if last.date == date => last.close = close,
                _ => points.push(PricePoint::new(date, close)),
            }
        }
        points
    }
}

/// Comprehensive error type for provider operations
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// 429 Too Many Requests
    RateLimited { retry_after: Option<u64> },
    /// 5xx Server Error
    ServerError(u16, String),
    /// Other HTTP errors
    HttpError(u16, String),
    /// Request exceeded the configured timeout
    Timeout,
    /// Network/request error
    RequestError(String),
    /// Deserialization error
    DeserializationError(String),
    /// Error reported inside a successful chart body
    Upstream(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::RateLimited { retry_after: Some(secs) } => {
                write!(f, "Rate Limited. Retry after {} s", secs)
            }
            ProviderError::RateLimited { retry_after: None } => write!(f, "Rate Limited"),
            ProviderError::ServerError(code, msg) => write!(f, "Server Error ({}): {}", code, msg),
            ProviderError::HttpError(code, msg) => write!(f, "HTTP Error ({}): {}", code, msg),
            ProviderError::Timeout => write!(f, "Request Error: provider timed out"),
            ProviderError::RequestError(msg) => write!(f, "Request Error: {}", msg),
            ProviderError::DeserializationError(msg) => write!(f, "Deserialization Error: {}", msg),
            ProviderError::Upstream(msg) => write!(f, "Provider Error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

#[cfg(test)]
mod tests {
    use super::*;

    const AAPL_CHART: &str = r#"{
        "chart": {
            "result": [{
                "meta": { "currency": "USD", "symbol": "AAPL", "gmtoffset": -14400 },
                "timestamp": [1717594200, 1717680600, 1717767000, 1717785000],
                "indicators": {
                    "quote": [{
                        "open": [195.4, 195.7, 194.6, 196.0],
                        "close": [195.87, null, 196.89, 197.12]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_chart_drops_null_closes_and_keeps_last_bar_per_day() {
        let response: ChartResponse = serde_json::from_str(AAPL_CHART).unwrap();
        let points = response.into_price_points().unwrap();

        // 1717767000 and 1717785000 fall on the same exchange-local day
        assert_eq!(
            points,
            vec![
                PricePoint::new(date("2024-06-05"), 195.87),
                PricePoint::new(date("2024-06-07"), 197.12),
            ]
        );
    }

    #[test]
    fn test_not_found_error_is_an_empty_series() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        let response: ChartResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_price_points().unwrap().is_empty());
    }

    #[test]
    fn test_other_chart_errors_are_surfaced() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Bad Request","description":"Invalid input - interval=1x is not supported"}}}"#;
        let response: ChartResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.into_price_points().unwrap_err(),
            ProviderError::Upstream("Invalid input - interval=1x is not supported".to_string())
        );
    }

    #[test]
    fn test_result_without_timestamps_is_empty() {
        let body = r#"{"chart":{"result":[{"meta":{"symbol":"NEWCO"},"indicators":{"quote":[{}]}}],"error":null}}"#;
        let response: ChartResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_price_points().unwrap().is_empty());
    }
}
