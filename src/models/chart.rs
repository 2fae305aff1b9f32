use chrono::NaiveDate;
use serde::Serialize;

/// One named line in a chart, aligned with the shared date axis.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Line-chart document the single-page client renders: a title, a shared
/// date axis, and ordered named series. The legend is the series names.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub dates: Vec<NaiveDate>,
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, dates: Vec<NaiveDate>) -> Self {
        Self {
            title: title.into(),
            dates,
            series: Vec::new(),
        }
    }

    pub fn push_line(&mut self, name: impl Into<String>, values: Vec<Option<f64>>) {
        self.series.push(ChartSeries {
            name: name.into(),
            values,
        });
    }

    pub fn legend(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }
}
