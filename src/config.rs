/// Exchange lookup conventions for the market-data provider. Jakarta
/// listings are looked up as lowercase symbols with a market suffix
/// ("BBRI" becomes "bbri.jk"), so the suffix stays configurable instead of
/// being baked into the fetch path.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    pub exchange_suffix: String,
}

impl MarketConfig {
    pub fn from_env() -> Self {
        Self {
            exchange_suffix: std::env::var("EXCHANGE_SUFFIX")
                .unwrap_or_else(|_| ".jk".to_string()),
        }
    }

    pub fn symbol_for(&self, ticker: &str) -> String {
        format!("{}{}", ticker.to_lowercase(), self.exchange_suffix)
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            exchange_suffix: ".jk".to_string(),
        }
    }
}
