use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry without
/// a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_primitive_count: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_arc_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_primitive_count = frame.primitives.len();
        self.last_line_count = frame.lines().count();
        self.last_rect_count = frame.rects().count();
        self.last_arc_count = frame.arcs().count();
        self.last_text_count = frame.texts().count();
        Ok(())
    }
}
