use crate::error::PlotResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content and remembers the last drawn text, so
/// tests can check what a paint pass would have shown.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub last_path_count: usize,
    pub last_text_count: usize,
    pub last_texts: Vec<String>,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.last_rect_count = frame.rects.len();
        self.last_path_count = frame.paths.len();
        self.last_text_count = frame.texts.len();
        self.last_texts = frame.texts.iter().map(|text| text.text.clone()).collect();
        self.frames_rendered += 1;
        Ok(())
    }
}
