//! Deterministic backend fixture shared by the integration tests.

use resume_report_render::{Color, FontSpec, RectSpec, RenderBackend, RenderError};

/// Per-character advance as a fraction of the font size.
///
/// Wide enough that realistic chip fixtures wrap within an A4 content band.
pub const CHAR_ADVANCE_RATIO: f32 = 0.8;

/// One captured draw call, tagged with the page it landed on (1-based).
#[derive(Clone, Debug, PartialEq)]
pub enum Recorded {
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        page: usize,
    },
    Rect {
        rect: RectSpec,
        page: usize,
    },
    Save {
        file_name: String,
    },
}

/// Backend that records draw calls and measures with a fixed advance.
pub struct RecordingBackend {
    page_width: f32,
    page_height: f32,
    pub calls: Vec<Recorded>,
    pub pages: usize,
    pub saves: usize,
}

impl RecordingBackend {
    pub fn a4() -> Self {
        Self::with_page_size(595.28, 841.89)
    }

    pub fn with_page_size(page_width: f32, page_height: f32) -> Self {
        Self {
            page_width,
            page_height,
            calls: Vec::new(),
            pages: 1,
            saves: 0,
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Recorded::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|text| *text == needle)
    }

    /// Rectangles of exactly this height, in draw order.
    pub fn rects_of_height(&self, height: f32) -> Vec<&RectSpec> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Recorded::Rect { rect, .. } if rect.height == height => Some(rect),
                _ => None,
            })
            .collect()
    }

    /// Index of the first text record equal to `needle`.
    pub fn text_index(&self, needle: &str) -> Option<usize> {
        self.calls.iter().position(|call| {
            matches!(call, Recorded::Text { text, .. } if text == needle)
        })
    }
}

impl RenderBackend for RecordingBackend {
    fn page_width(&self) -> f32 {
        self.page_width
    }

    fn page_height(&self) -> f32 {
        self.page_height
    }

    fn text_width(&mut self, text: &str, font: &FontSpec) -> Result<f32, RenderError> {
        Ok(text.chars().count() as f32 * font.size * CHAR_ADVANCE_RATIO)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &FontSpec,
        _color: Color,
    ) -> Result<(), RenderError> {
        self.calls.push(Recorded::Text {
            text: text.to_string(),
            x,
            y,
            size: font.size,
            page: self.pages,
        });
        Ok(())
    }

    fn draw_rect(&mut self, rect: &RectSpec) -> Result<(), RenderError> {
        self.calls.push(Recorded::Rect {
            rect: *rect,
            page: self.pages,
        });
        Ok(())
    }

    fn new_page(&mut self) -> Result<(), RenderError> {
        self.pages += 1;
        Ok(())
    }

    fn save(&mut self, file_name: &str) -> Result<(), RenderError> {
        self.saves += 1;
        self.calls.push(Recorded::Save {
            file_name: file_name.to_string(),
        });
        Ok(())
    }
}
