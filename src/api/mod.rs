pub mod yahoo;

use async_trait::async_trait;
use crate::models::PricePoint;

pub use yahoo::{ProviderError, YahooClient};

/// Upstream source of daily closing prices, keyed by ticker symbol.
///
/// Implementations return the trailing one-month window in chronological
/// order. An unknown symbol is an empty series, not an error.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_history(&self, symbol: &str) -> Result<Vec<PricePoint>, ProviderError>;
}
