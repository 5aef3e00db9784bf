//! Quote lookup models

use super::PricePoint;

/// Latest price, daily change and trailing history for one ticker
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Upper-cased ticker symbol
    pub symbol: String,
    /// Most recent close
    pub price: f64,
    /// Percent change between the two most recent closes
    pub change_percent: f64,
    /// Chronological (oldest first) daily closes
    pub history: Vec<PricePoint>,
}

impl Quote {
    pub fn dates(&self) -> Vec<String> {
        self.history
            .iter()
            .map(|p| p.date.format("%Y-%m-%d").to_string())
            .collect()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.history.iter().map(|p| p.close).collect()
    }
}
