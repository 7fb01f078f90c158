use crate::error::RenderError;

/// A4 page width in points.
pub const A4_WIDTH_PT: f32 = 595.28;
/// A4 page height in points.
pub const A4_HEIGHT_PT: f32 = 841.89;
/// Reference page margin in points.
pub const DEFAULT_MARGIN_PT: f32 = 40.0;

/// Immutable page geometry, fixed for a document's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    page_width: f32,
    page_height: f32,
    margin: f32,
}

impl PageGeometry {
    /// Validate and freeze a page geometry.
    ///
    /// A negative content band is a configuration error, not a runtime
    /// condition to recover from.
    pub fn new(page_width: f32, page_height: f32, margin: f32) -> Result<Self, RenderError> {
        let content_width = page_width - 2.0 * margin;
        let valid = page_width > 0.0 && page_height > 0.0 && content_width >= 0.0;
        if !valid {
            return Err(RenderError::InvalidLayout {
                what: "content width",
                value: content_width,
            });
        }
        Ok(Self {
            page_width,
            page_height,
            margin,
        })
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Usable horizontal band: page width minus both margins.
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Right edge of the content band.
    pub fn right_limit(&self) -> f32 {
        self.page_width - self.margin
    }
}
