use std::sync::Arc;

use crate::config::MarketConfig;
use crate::external::price_provider::PriceProvider;
use crate::services::session::SessionCache;

#[derive(Clone)]
pub struct AppState {
    pub price_provider: Arc<dyn PriceProvider>,
    pub sessions: SessionCache,
    pub market: MarketConfig,
}
