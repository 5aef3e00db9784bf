use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{debug, warn};
use super::models::{ChartResponse, ProviderError};
use crate::api::QuoteProvider;
use crate::models::PricePoint;
use crate::utils::RateLimiter;

/// Yahoo Finance chart API client for daily closing prices
pub struct YahooClient {
    http_client: HttpClient,
    base_url: String,
    limiter: RateLimiter,
    timeout: Duration,
}

impl YahooClient {
    const RANGE: &'static str = "1mo";
    const INTERVAL: &'static str = "1d";
    // The chart endpoint rejects requests without a browser-like agent
    const USER_AGENT: &'static str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) market-watcher/1.1";

    /// Create a client against `base_url` (the public endpoint in production, a fake in tests)
    pub fn with_base_url(
        base_url: String,
        timeout: Duration,
        max_requests_per_sec: usize,
    ) -> Result<Self, ProviderError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .user_agent(Self::USER_AGENT)
            .build()
            .map_err(|e| ProviderError::RequestError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url,
            limiter: RateLimiter::per_second(max_requests_per_sec),
            timeout,
        })
    }

    /// `{base}/v8/finance/chart/{symbol}`, with the symbol escaped as a single path segment
    fn chart_url(&self, symbol: &str) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProviderError::RequestError(format!("Invalid base URL '{}': {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ProviderError::RequestError(format!("Invalid base URL '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(&["v8", "finance", "chart", symbol]);

        Ok(url)
    }

    fn map_transport_error(e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if e.is_decode() {
            ProviderError::DeserializationError(e.to_string())
        } else {
            ProviderError::RequestError(format!("Request failed: {}", e))
        }
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> ProviderError {
        let status_code = status.as_u16();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok());
            warn!("Quote provider rate limited us, retry after {:?}s", retry_after);
            return ProviderError::RateLimited { retry_after };
        }

        let body_text = response.text().await.unwrap_or_default();
        match status_code {
            500..=599 => {
                warn!("Quote provider server error {}: {}", status_code, body_text);
                ProviderError::ServerError(status_code, body_text)
            }
            _ => ProviderError::HttpError(status_code, body_text),
        }
    }

    /// GET /v8/finance/chart/{symbol}?range=1mo&interval=1d
    ///
    /// A 404 means the symbol is unknown or delisted and is returned as an
    /// empty series so the caller can decide how to report it.
    async fn fetch_chart(&self, symbol: &str) -> Result<Vec<PricePoint>, ProviderError> {
        self.limiter.acquire().await;

        let url = self.chart_url(symbol)?;
        debug!("Fetching {} history from {}", symbol, url);

        let response = self
            .http_client
            .get(url)
            .query(&[("range", Self::RANGE), ("interval", Self::INTERVAL), ("events", "history")])
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("Quote provider has no data for {}", symbol);
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let body = response.text().await.map_err(Self::map_transport_error)?;
        let chart: ChartResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::DeserializationError(format!("Failed to parse response: {}", e)))?;

        chart.into_price_points()
    }
}

#[async_trait]
impl QuoteProvider for YahooClient {
    async fn fetch_history(&self, symbol: &str) -> Result<Vec<PricePoint>, ProviderError> {
        // The timeout covers the rate limiter wait as well as the request
        tokio::time::timeout(self.timeout, self.fetch_chart(symbol))
            .await
            .map_err(|_| ProviderError::Timeout)?
    }
}
