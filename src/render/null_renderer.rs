use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch inconsistent axis or
/// series output without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_axis_count: usize,
    pub last_series_count: usize,
    pub last_show_legend: bool,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_axis_count = frame.axes.len();
        self.last_series_count = frame.series.len();
        self.last_show_legend = frame.show_legend;
        self.frames_rendered += 1;
        Ok(())
    }
}
