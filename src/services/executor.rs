use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::MarketConfig;
use crate::errors::AppError;
use crate::external::price_provider::PriceProvider;
use crate::models::{ChartSpec, OutputBlock, StockSeries};
use crate::services::indicators;
use crate::services::interpreter;
use crate::services::session::SessionCache;

const TAIL_ROWS: usize = 5;

/// Runs one submitted command to completion: tokenize, extract, fetch if a
/// ticker was named, then walk the extracted actions in order. Returns the
/// display blocks in the order the client should render them.
///
/// A collaborator fault (bad ticker, no data, missing cached series) aborts
/// the command; the session keeps whatever series it had before, because
/// the cache is only written after a successful fetch.
pub async fn execute(
    provider: &dyn PriceProvider,
    sessions: &SessionCache,
    market: &MarketConfig,
    session_id: Uuid,
    command: &str,
) -> Result<Vec<OutputBlock>, AppError> {
    let tokens = interpreter::tokenize(command);
    let parsed = interpreter::extract_keywords(&tokens);
    info!(
        "Parsed command: ticker={:?} actions={:?} indicators={:?}",
        parsed.ticker, parsed.actions, parsed.indicators
    );

    let end_date = parsed.end_date.unwrap_or_else(|| Utc::now().date_naive());
    let mut outputs = Vec::new();

    if let Some(ticker) = &parsed.ticker {
        let start_label = parsed
            .start_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "earliest".to_string());
        outputs.push(OutputBlock::message(format!(
            "Fetching stock data for {ticker} from {start_label} to {end_date}"
        )));

        let symbol = market.symbol_for(ticker);
        let bars = provider
            .fetch_history(&symbol, parsed.start_date, end_date)
            .await?;
        let series = StockSeries::from_bars(ticker, &bars);
        sessions.put(session_id, series);
    }

    for action in &parsed.actions {
        if action == "ambil" {
            let series = cached(sessions, session_id)?;
            outputs.push(OutputBlock::Table {
                csv: series.to_csv()?,
            });
        }

        // Runs once per action iteration, not once per command. The
        // interactive tool this replaces recomputed indicators inside its
        // action loop; kept for compatibility.
        if !parsed.indicators.is_empty() {
            let mut series = cached(sessions, session_id)?;
            for indicator in &parsed.indicators {
                match indicator.to_lowercase().as_str() {
                    "rsi" => {
                        let column = indicators::rsi(&series.close, indicators::RSI_PERIOD);
                        series.set_column("RSI", column);
                        outputs.push(OutputBlock::message("RSI calculated."));
                    }
                    "macd" => {
                        let (line, signal) = indicators::macd(
                            &series.close,
                            indicators::MACD_FAST,
                            indicators::MACD_SLOW,
                            indicators::MACD_SIGNAL,
                        );
                        series.set_column("MACD", line);
                        series.set_column("MACD_Signal", signal);
                        outputs.push(OutputBlock::message("MACD calculated."));
                    }
                    "ma50" => {
                        let column = indicators::sma(&series.close, indicators::MA50_WINDOW);
                        series.set_column("MA50", column);
                        outputs.push(OutputBlock::message("MA50 calculated."));
                    }
                    "ma20" => {
                        let column = indicators::sma(&series.close, indicators::MA20_WINDOW);
                        series.set_column("MA20", column);
                        outputs.push(OutputBlock::message("MA20 calculated."));
                    }
                    _ => {}
                }
            }
            outputs.push(OutputBlock::Table {
                csv: series.tail(TAIL_ROWS).to_csv()?,
            });
            sessions.put(session_id, series);
            outputs.push(OutputBlock::message("Stock data saved in session state."));
        }

        if action == "tampilkan" {
            let series = cached(sessions, session_id)?;
            outputs.push(OutputBlock::message(
                "Displaying the stock data chart with indicators:",
            ));
            outputs.push(OutputBlock::Chart {
                spec: build_chart(&series, &parsed.indicators),
            });
        }

        // "hitung" has no branch of its own: indicator computation is gated
        // on the indicators list alone, so the action is extracted but inert.
    }

    Ok(outputs)
}

fn cached(sessions: &SessionCache, session_id: Uuid) -> Result<StockSeries, AppError> {
    sessions.get(session_id).ok_or_else(|| {
        AppError::NotFound("no stock data fetched yet for this session".to_string())
    })
}

/// Close price always plots; each requested indicator overlays its column
/// only when present. MACD contributes both of its lines.
fn build_chart(series: &StockSeries, requested: &[String]) -> ChartSpec {
    let mut spec = ChartSpec::new(
        format!("{} Stock Data with Indicators", series.name),
        series.dates.clone(),
    );
    spec.push_line(
        "Close Price",
        series.close.iter().copied().map(Some).collect(),
    );

    for indicator in requested {
        match indicator.to_lowercase().as_str() {
            "ma50" => overlay(&mut spec, series, "MA50", "MA50"),
            "ma20" => overlay(&mut spec, series, "MA20", "MA20"),
            "rsi" => overlay(&mut spec, series, "RSI", "RSI"),
            "macd" => {
                overlay(&mut spec, series, "MACD", "MACD");
                overlay(&mut spec, series, "MACD_Signal", "MACD Signal");
            }
            _ => {}
        }
    }

    spec
}

fn overlay(spec: &mut ChartSpec, series: &StockSeries, column: &str, label: &str) {
    if let Some(values) = series.column(column) {
        spec.push_line(label, values.to_vec());
    }
}
