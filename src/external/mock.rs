use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::external::price_provider::{OhlcvBar, PriceProvider, PriceProviderError};

/// Synthetic random-walk provider for offline development and tests.
/// Honors the requested range and skips weekends like a real exchange feed.
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceProvider for MockProvider {
    async fn fetch_history(
        &self,
        symbol: &str,
        start: Option<NaiveDate>,
        end: NaiveDate,
    ) -> Result<Vec<OhlcvBar>, PriceProviderError> {
        let start = start.unwrap_or(end - Duration::days(180));
        if start > end {
            return Err(PriceProviderError::NoData(symbol.to_string()));
        }

        let mut bars = Vec::new();
        let mut close = 100.0 + rand::random::<f64>() * 50.0;
        let mut day = start;

        while day <= end {
            if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
                let open = close;
                close *= 1.0 + (rand::random::<f64>() - 0.5) * 0.02;
                bars.push(OhlcvBar {
                    date: day,
                    open,
                    high: open.max(close) * 1.005,
                    low: open.min(close) * 0.995,
                    close,
                    volume: (1_000_000.0 + rand::random::<f64>() * 4_000_000.0).round(),
                });
            }
            day = day + Duration::days(1);
        }

        if bars.is_empty() {
            return Err(PriceProviderError::NoData(symbol.to_string()));
        }

        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_covers_requested_range() {
        let provider = MockProvider::new();
        let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
        let bars = provider
            .fetch_history("bbri.jk", Some(start), end)
            .await
            .unwrap();

        assert!(!bars.is_empty());
        assert!(bars.first().unwrap().date >= start);
        assert!(bars.last().unwrap().date <= end);
        assert!(bars
            .iter()
            .all(|b| !matches!(b.date.weekday(), Weekday::Sat | Weekday::Sun)));
    }

    #[tokio::test]
    async fn test_mock_provider_rejects_inverted_range() {
        let provider = MockProvider::new();
        let start = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let err = provider
            .fetch_history("bbri.jk", Some(start), end)
            .await
            .unwrap_err();
        assert!(matches!(err, PriceProviderError::NoData(_)));
    }
}
