use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// One trading day as returned by a market-data provider.
#[derive(Debug, Clone)]
pub struct OhlcvBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

#[derive(Debug, Error)]
pub enum PriceProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("rate limited")]
    RateLimited,

    #[error("no trading data for {0}")]
    NoData(String),
}

#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Daily history over `[start, end]`, both inclusive. A `None` start
    /// means "from the earliest the provider has". An empty range is a
    /// `NoData` error, never an empty vec.
    async fn fetch_history(
        &self,
        symbol: &str,
        start: Option<NaiveDate>,
        end: NaiveDate,
    ) -> Result<Vec<OhlcvBar>, PriceProviderError>;
}
