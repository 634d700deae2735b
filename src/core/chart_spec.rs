use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded chart message: series array plus layout object.
///
/// Series entries and layout fields are opaque to the panel and handed to the
/// chart widget as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedChartSpec {
    pub series: Vec<Value>,
    pub layout: Map<String, Value>,
}

impl ParsedChartSpec {
    #[must_use]
    pub fn new(series: Vec<Value>, layout: Map<String, Value>) -> Self {
        Self { series, layout }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.layout.is_empty()
    }
}

/// Final figure handed to the chart widget.
///
/// Serializes to the widget's `{ "data": [...], "layout": {...} }` shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartFigure {
    pub data: Vec<Value>,
    pub layout: Map<String, Value>,
}
