mod null_widget;

pub use null_widget::NullWidget;

use crate::core::ChartFigure;
use crate::error::PanelResult;

/// Contract implemented by the charting widget embedded in the panel.
///
/// The widget receives a fully merged figure; drawing, per-series validation,
/// and resizing are its own concern.
pub trait ChartWidget {
    fn render(&mut self, figure: &ChartFigure) -> PanelResult<()>;
}

impl<W: ChartWidget + ?Sized> ChartWidget for Box<W> {
    fn render(&mut self, figure: &ChartFigure) -> PanelResult<()> {
        (**self).render(figure)
    }
}
