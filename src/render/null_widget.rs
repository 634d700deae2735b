use crate::core::ChartFigure;
use crate::error::PanelResult;
use crate::render::ChartWidget;

/// Headless widget used by tests and hosts without a drawing surface.
///
/// It still serializes every figure so tests catch payloads the real widget
/// could not receive.
#[derive(Debug, Default)]
pub struct NullWidget {
    pub render_count: usize,
    pub last_figure: Option<ChartFigure>,
    pub last_payload_len: usize,
}

impl ChartWidget for NullWidget {
    fn render(&mut self, figure: &ChartFigure) -> PanelResult<()> {
        self.last_payload_len = figure.to_json_string()?.len();
        self.render_count += 1;
        self.last_figure = Some(figure.clone());
        Ok(())
    }
}
