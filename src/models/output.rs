use serde::Serialize;

use super::chart::ChartSpec;

/// One display block in the order the client should render it, mirroring
/// the progressive writes of the interactive page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputBlock {
    Message { text: String },
    Table { csv: String },
    Chart { spec: ChartSpec },
}

impl OutputBlock {
    pub fn message(text: impl Into<String>) -> Self {
        OutputBlock::Message { text: text.into() }
    }
}
