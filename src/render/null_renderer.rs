use crate::core::SliderValue;
use crate::error::SliderResult;
use crate::render::{Renderer, SliderFrame};

/// No-op renderer used by tests and headless slider usage.
///
/// It still validates frame content so tests catch invalid geometry.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frame_count: usize,
    pub last_tick_count: usize,
    pub last_value: Option<SliderValue>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SliderFrame) -> SliderResult<()> {
        frame.validate()?;
        self.frame_count += 1;
        self.last_tick_count = frame.ticks.len();
        self.last_value = Some(frame.value);
        Ok(())
    }
}
