use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Host color scheme observed by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

const DARK_BACKGROUND: &str = "rgb(17,17,17)";
const DARK_FOREGROUND: &str = "#f2f5fa";
const DARK_GRID: &str = "#283442";
const DARK_ZERO_LINE: &str = "#283442";
const DARK_AXIS_LINE: &str = "#506784";

/// Color and style tokens overlaid on the author layout in dark mode.
///
/// Shaped as a widget template object: layout-level defaults under `layout`.
#[must_use]
pub fn dark_template() -> Value {
    let axis = json!({
        "gridcolor": DARK_GRID,
        "linecolor": DARK_AXIS_LINE,
        "zerolinecolor": DARK_ZERO_LINE,
        "ticks": "",
        "automargin": true,
        "zerolinewidth": 2,
    });

    let mut layout = Map::new();
    layout.insert("paper_bgcolor".to_owned(), json!(DARK_BACKGROUND));
    layout.insert("plot_bgcolor".to_owned(), json!(DARK_BACKGROUND));
    layout.insert("font".to_owned(), json!({ "color": DARK_FOREGROUND }));
    layout.insert("xaxis".to_owned(), axis.clone());
    layout.insert("yaxis".to_owned(), axis);
    layout.insert(
        "legend".to_owned(),
        json!({ "bgcolor": "rgba(0,0,0,0)", "font": { "color": DARK_FOREGROUND } }),
    );
    layout.insert(
        "hoverlabel".to_owned(),
        json!({ "align": "left", "bgcolor": DARK_BACKGROUND }),
    );
    layout.insert(
        "colorway".to_owned(),
        json!([
            "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692",
            "#B6E880", "#FF97FF", "#FECB52"
        ]),
    );

    json!({ "layout": Value::Object(layout) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_uses_host_color_scheme_names() {
        let dark: ThemeState = serde_json::from_str("\"dark\"").expect("dark");
        assert_eq!(dark, ThemeState::Dark);
        assert_eq!(serde_json::to_string(&ThemeState::Light).expect("light"), "\"light\"");
    }

    #[test]
    fn dark_template_sets_background_colors() {
        let template = dark_template();
        assert_eq!(template["layout"]["paper_bgcolor"], DARK_BACKGROUND);
        assert_eq!(template["layout"]["plot_bgcolor"], DARK_BACKGROUND);
    }
}
