mod frame;
mod null_renderer;

pub use frame::{AxisTick, PointerTooltip, SliderFrame};
pub use null_renderer::NullRenderer;

use crate::error::SliderResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully resolved `SliderFrame` (pixel offsets, labels,
/// highlight) so drawing code stays isolated from scale and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &SliderFrame) -> SliderResult<()>;
}
