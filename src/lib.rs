//! chart-panel: renders JSON chart messages from a topic inside a host panel.
//!
//! Messages carry a JSON series array and an optional JSON layout object. The
//! panel picks the newest message of each host frame, decodes it, applies the
//! theme-dependent layout overrides, and hands the figure to a chart widget.

pub mod api;
pub mod core;
pub mod error;
pub mod panel;
pub mod render;
pub mod telemetry;

pub use api::{PanelConfig, build_figure, merge_layout, select_latest, translate};
pub use error::{PanelError, PanelResult};
pub use panel::ChartPanel;
