use serde_json::{Map, Value};

use crate::core::{ChartFigure, ParsedChartSpec, ThemeState, dark_template};

pub const AUTOSIZE_KEY: &str = "autosize";
pub const TEMPLATE_KEY: &str = "template";

/// Applies the panel-imposed layout fields.
///
/// `autosize` is always forced on so the widget fills the panel. In dark mode
/// the dark template replaces any author template; in light mode the author
/// layout is left as-is. Field order of the author layout is preserved.
#[must_use]
pub fn merge_layout(mut layout: Map<String, Value>, theme: ThemeState) -> Map<String, Value> {
    layout.insert(AUTOSIZE_KEY.to_owned(), Value::Bool(true));
    if theme.is_dark() {
        layout.insert(TEMPLATE_KEY.to_owned(), dark_template());
    }
    layout
}

#[must_use]
pub fn build_figure(spec: ParsedChartSpec, theme: ThemeState) -> ChartFigure {
    ChartFigure {
        data: spec.series,
        layout: merge_layout(spec.layout, theme),
    }
}
