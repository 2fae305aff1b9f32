use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppError;
use crate::external::price_provider::OhlcvBar;

/// One named indicator column, aligned row-for-row with the series dates.
/// `None` marks rows where the indicator's window has not filled yet.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

// Column-oriented daily price table for a single ticker. Indicator columns
// attach in place; the session cache holds exactly one instance per session
// and replaces it wholesale on each new fetch.
#[derive(Debug, Clone, Serialize)]
pub struct StockSeries {
    pub name: String,
    pub dates: Vec<NaiveDate>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
    pub indicators: Vec<IndicatorColumn>,
}

impl StockSeries {
    pub fn from_bars(name: &str, bars: &[OhlcvBar]) -> Self {
        let mut series = Self {
            name: name.to_string(),
            dates: Vec::with_capacity(bars.len()),
            open: Vec::with_capacity(bars.len()),
            high: Vec::with_capacity(bars.len()),
            low: Vec::with_capacity(bars.len()),
            close: Vec::with_capacity(bars.len()),
            volume: Vec::with_capacity(bars.len()),
            indicators: Vec::new(),
        };
        for bar in bars {
            series.dates.push(bar.date);
            series.open.push(bar.open);
            series.high.push(bar.high);
            series.low.push(bar.low);
            series.close.push(bar.close);
            series.volume.push(bar.volume);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Attach or replace a named indicator column. `values` must be aligned
    /// with `dates`.
    pub fn set_column(&mut self, name: &str, values: Vec<Option<f64>>) {
        if let Some(column) = self.indicators.iter_mut().find(|c| c.name == name) {
            column.values = values;
        } else {
            self.indicators.push(IndicatorColumn {
                name: name.to_string(),
                values,
            });
        }
    }

    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.indicators
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Last `n` rows as a new series, indicator columns included.
    pub fn tail(&self, n: usize) -> StockSeries {
        let skip = self.len().saturating_sub(n);
        StockSeries {
            name: self.name.clone(),
            dates: self.dates[skip..].to_vec(),
            open: self.open[skip..].to_vec(),
            high: self.high[skip..].to_vec(),
            low: self.low[skip..].to_vec(),
            close: self.close[skip..].to_vec(),
            volume: self.volume[skip..].to_vec(),
            indicators: self
                .indicators
                .iter()
                .map(|c| IndicatorColumn {
                    name: c.name.clone(),
                    values: c.values[skip..].to_vec(),
                })
                .collect(),
        }
    }

    /// Full dump of every column, one CSV row per trading day. Unfilled
    /// indicator cells render as empty strings.
    pub fn to_csv(&self) -> Result<String, AppError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header: Vec<String> = ["Date", "Open", "High", "Low", "Close", "Volume"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        header.extend(self.indicators.iter().map(|c| c.name.clone()));
        writer
            .write_record(&header)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        for i in 0..self.len() {
            let mut record = vec![
                self.dates[i].to_string(),
                format!("{:.2}", self.open[i]),
                format!("{:.2}", self.high[i]),
                format!("{:.2}", self.low[i]),
                format!("{:.2}", self.close[i]),
                format!("{:.0}", self.volume[i]),
            ];
            for column in &self.indicators {
                record.push(
                    column.values[i]
                        .map(|v| format!("{v:.4}"))
                        .unwrap_or_default(),
                );
            }
            writer
                .write_record(&record)
                .map_err(|e| AppError::Internal(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| AppError::Internal(e.to_string()))
    }
}
