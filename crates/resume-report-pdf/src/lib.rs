//! `printpdf` backend for the resume report engine.
//!
//! Implements the [`RenderBackend`] capability over printpdf's built-in
//! Helvetica faces, converting the composer's top-left-origin coordinates
//! to PDF page space at the draw boundary. Text metrics come from the
//! embedded AFM advance tables in [`font_catalog`].

#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

mod metrics;

pub use metrics::{font_catalog, FontCatalog};

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Local;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color as PdfColor, IndirectFontRef, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point, Polygon, Pt, Rgb,
};
use resume_report::AnalysisResult;
use resume_report_render::{
    compose_report, Color, FontSpec, FontStyle, RectSpec, RenderBackend, RenderError,
    A4_HEIGHT_PT, A4_WIDTH_PT, REPORT_FILE_NAME,
};

const DOCUMENT_TITLE: &str = "Resume Analysis Report";
const LAYER_NAME: &str = "content";

/// printpdf-backed drawing surface producing an A4 document.
///
/// One backend instance backs one generation run; after `save` the
/// document is gone and further draw calls fail.
pub struct PdfBackend {
    doc: Option<PdfDocumentReference>,
    page: PdfPageIndex,
    layer: PdfLayerIndex,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    catalog: &'static FontCatalog,
    out_dir: PathBuf,
}

impl PdfBackend {
    /// Open a fresh A4 surface that saves into `out_dir`.
    pub fn create(out_dir: impl Into<PathBuf>) -> Result<Self, RenderError> {
        let catalog = font_catalog();
        let (doc, page, layer) = PdfDocument::new(
            DOCUMENT_TITLE,
            Mm::from(Pt(A4_WIDTH_PT)),
            Mm::from(Pt(A4_HEIGHT_PT)),
            LAYER_NAME,
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::BackendLoad(format!("register Helvetica: {e}")))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::BackendLoad(format!("register Helvetica-Bold: {e}")))?;
        Ok(Self {
            doc: Some(doc),
            page,
            layer,
            regular,
            bold,
            catalog,
            out_dir: out_dir.into(),
        })
    }

    fn current_layer(&self) -> Result<PdfLayerReference, RenderError> {
        let doc = self
            .doc
            .as_ref()
            .ok_or_else(|| RenderError::Backend("document already saved".to_string()))?;
        Ok(doc.get_page(self.page).get_layer(self.layer))
    }

    fn font_ref(&self, font: &FontSpec) -> &IndirectFontRef {
        if font.family != "helvetica" {
            log::warn!(
                "unknown font family {:?}; falling back to helvetica",
                font.family
            );
        }
        match font.style {
            FontStyle::Normal => &self.regular,
            FontStyle::Bold => &self.bold,
        }
    }
}

/// Top-left y to PDF bottom-left y.
fn flip_y(y: f32) -> f32 {
    A4_HEIGHT_PT - y
}

fn pdf_color(color: Color) -> PdfColor {
    PdfColor::Rgb(Rgb::new(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
        None,
    ))
}

impl RenderBackend for PdfBackend {
    fn page_width(&self) -> f32 {
        A4_WIDTH_PT
    }

    fn page_height(&self) -> f32 {
        A4_HEIGHT_PT
    }

    fn text_width(&mut self, text: &str, font: &FontSpec) -> Result<f32, RenderError> {
        Ok(self.catalog.text_width(text, font))
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &FontSpec,
        color: Color,
    ) -> Result<(), RenderError> {
        let layer = self.current_layer()?;
        layer.set_fill_color(pdf_color(color));
        layer.use_text(
            text,
            font.size,
            Mm::from(Pt(x)),
            Mm::from(Pt(flip_y(y))),
            self.font_ref(font),
        );
        Ok(())
    }

    fn draw_rect(&mut self, rect: &RectSpec) -> Result<(), RenderError> {
        // Corner radii flatten to square corners; the path carries no arc
        // segments.
        let layer = self.current_layer()?;
        layer.set_fill_color(pdf_color(rect.fill));
        let left = rect.x;
        let right = rect.x + rect.width;
        let top = flip_y(rect.y);
        let bottom = flip_y(rect.y + rect.height);
        let ring = vec![
            (Point::new(Mm::from(Pt(left)), Mm::from(Pt(bottom))), false),
            (Point::new(Mm::from(Pt(right)), Mm::from(Pt(bottom))), false),
            (Point::new(Mm::from(Pt(right)), Mm::from(Pt(top))), false),
            (Point::new(Mm::from(Pt(left)), Mm::from(Pt(top))), false),
        ];
        layer.add_polygon(Polygon {
            rings: vec![ring],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
        Ok(())
    }

    fn new_page(&mut self) -> Result<(), RenderError> {
        let doc = self
            .doc
            .as_ref()
            .ok_or_else(|| RenderError::Backend("document already saved".to_string()))?;
        let (page, layer) = doc.add_page(
            Mm::from(Pt(A4_WIDTH_PT)),
            Mm::from(Pt(A4_HEIGHT_PT)),
            LAYER_NAME,
        );
        self.page = page;
        self.layer = layer;
        Ok(())
    }

    fn save(&mut self, file_name: &str) -> Result<(), RenderError> {
        let doc = self
            .doc
            .take()
            .ok_or_else(|| RenderError::Backend("document already saved".to_string()))?;
        let path = self.out_dir.join(file_name);
        let file = File::create(&path)
            .map_err(|e| RenderError::Backend(format!("create {}: {e}", path.display())))?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| RenderError::Backend(format!("save {}: {e}", path.display())))?;
        log::debug!("report saved to {}", path.display());
        Ok(())
    }
}

/// Compose `analysis` into [`REPORT_FILE_NAME`] under `out_dir`.
///
/// Provisions the backend, stamps the generation time, composes every
/// section, and saves. Returns the path of the written document. The run
/// either completes with a finished document or fails with nothing
/// written; there is no mid-page abort.
pub fn generate_report(
    analysis: &AnalysisResult,
    out_dir: impl AsRef<Path>,
) -> Result<PathBuf, RenderError> {
    let out_dir = out_dir.as_ref();
    let backend = PdfBackend::create(out_dir)?;
    let generated_at = Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string();
    compose_report(backend, analysis, &generated_at)?;
    Ok(out_dir.join(REPORT_FILE_NAME))
}
