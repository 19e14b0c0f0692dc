mod frame;
mod null_renderer;
mod primitives;
mod series;

pub use frame::{RenderFrame, YAxisSpec};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LineStrokeStyle};
pub use series::{SeriesKind, SeriesMarkLine, SeriesPoint, SeriesSpec};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully resolved `RenderFrame` (axes, flat series list,
/// legend state) so drawing code never repeats axis or unit decisions.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
