mod app;
mod config;
mod errors;
mod external;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::MarketConfig;
use crate::external::mock::MockProvider;
use crate::external::price_provider::PriceProvider;
use crate::external::yahoo::YahooProvider;
use crate::logging::LoggingConfig;
use crate::services::session::SessionCache;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    logging::init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let market = MarketConfig::from_env();

    // Select price provider based on PRICE_PROVIDER env var (defaults to yahoo)
    let provider_name =
        std::env::var("PRICE_PROVIDER").unwrap_or_else(|_| "yahoo".to_string());
    let provider: Arc<dyn PriceProvider> = match provider_name.to_lowercase().as_str() {
        "yahoo" => {
            tracing::info!(
                "📊 Using price provider: Yahoo Finance (symbols suffixed '{}')",
                market.exchange_suffix
            );
            Arc::new(YahooProvider::new())
        }
        "mock" => {
            tracing::info!("📊 Using price provider: mock data (offline mode)");
            Arc::new(MockProvider::new())
        }
        other => {
            anyhow::bail!("Invalid PRICE_PROVIDER: {other}. Must be 'yahoo' or 'mock'")
        }
    };

    let state = AppState {
        price_provider: provider,
        sessions: SessionCache::new(),
        market,
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 sahamku backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
