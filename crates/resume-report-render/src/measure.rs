use crate::backend::{FontSpec, RenderBackend};
use crate::error::RenderError;

/// Text measurement hook consumed by wrapping and chip layout.
///
/// Pure query: same text and font always yield the same width. Backends
/// that keep an internal font context mutate it behind this call; nothing
/// else observes the mutation.
pub trait TextMeasurer {
    /// Measured width of `text` in points for the given font.
    fn measure(&mut self, text: &str, font: &FontSpec) -> Result<f32, RenderError>;
}

impl<B: RenderBackend + ?Sized> TextMeasurer for B {
    fn measure(&mut self, text: &str, font: &FontSpec) -> Result<f32, RenderError> {
        self.text_width(text, font)
    }
}
