pub mod chart_spec;
pub mod message;
pub mod schema;
pub mod theme;
pub mod time;

pub use chart_spec::{ChartFigure, ParsedChartSpec};
pub use message::{MessageEvent, MessageField, RawChartMessage, TopicInfo};
pub use schema::{CHART_SCHEMA_NAMES, ChartSchema, STRING_SCHEMA_NAMES, chart_topics};
pub use theme::{ThemeState, dark_template};
pub use time::ReceiptTime;
