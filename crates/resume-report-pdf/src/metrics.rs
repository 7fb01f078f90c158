use std::sync::OnceLock;

use resume_report_render::{FontSpec, FontStyle};

/// Advance widths for one face, in 1/1000 em units, ASCII 32..=126.
struct FaceMetrics {
    widths: [u16; 95],
    default_width: u16,
}

impl FaceMetrics {
    fn advance(&self, c: char) -> u16 {
        let code = c as u32;
        if (32..=126).contains(&code) {
            self.widths[(code - 32) as usize]
        } else {
            self.default_width
        }
    }
}

/// Metrics catalog for the backend's built-in faces.
pub struct FontCatalog {
    regular: FaceMetrics,
    bold: FaceMetrics,
}

impl FontCatalog {
    /// Width of `text` in points for the given font.
    pub fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        let face = match font.style {
            FontStyle::Normal => &self.regular,
            FontStyle::Bold => &self.bold,
        };
        let units: u32 = text.chars().map(|c| u32::from(face.advance(c))).sum();
        units as f32 * font.size / 1000.0
    }
}

static CATALOG: OnceLock<FontCatalog> = OnceLock::new();

/// The process-wide font-metrics catalog.
///
/// Provisioned at most once per process: concurrent first callers block on
/// the same initialization and every caller observes the same instance.
pub fn font_catalog() -> &'static FontCatalog {
    CATALOG.get_or_init(|| FontCatalog {
        regular: FaceMetrics {
            widths: HELVETICA_WIDTHS,
            default_width: 556,
        },
        bold: FaceMetrics {
            widths: HELVETICA_BOLD_WIDTHS,
            default_width: 611,
        },
    })
}

/// Helvetica AFM advances.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // space..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, // 'A'..'P'
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'Q'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, // 'a'..'p'
    556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'q'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Helvetica-Bold AFM advances.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // space..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, // 'A'..'P'
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'Q'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, // 'a'..'p'
    611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'q'..'z'
    389, 280, 389, 584, // '{'..'~'
];

#[cfg(test)]
mod tests {
    use super::font_catalog;
    use resume_report_render::{FontSpec, FontStyle};

    #[test]
    fn space_width_matches_the_afm_advance() {
        let catalog = font_catalog();
        let font = FontSpec::helvetica(FontStyle::Normal, 10.0);
        assert!((catalog.text_width(" ", &font) - 2.78).abs() < 0.001);
    }

    #[test]
    fn widths_scale_linearly_with_font_size() {
        let catalog = font_catalog();
        let small = FontSpec::helvetica(FontStyle::Normal, 10.0);
        let large = FontSpec::helvetica(FontStyle::Normal, 20.0);
        let at_small = catalog.text_width("ATS Score", &small);
        let at_large = catalog.text_width("ATS Score", &large);
        assert!((at_large - 2.0 * at_small).abs() < 0.001);
    }

    #[test]
    fn bold_cut_is_at_least_as_wide_as_regular() {
        let catalog = font_catalog();
        let regular = FontSpec::helvetica(FontStyle::Normal, 12.0);
        let bold = FontSpec::helvetica(FontStyle::Bold, 12.0);
        assert!(catalog.text_width("final", &bold) > catalog.text_width("final", &regular));
    }

    #[test]
    fn characters_outside_ascii_use_the_default_advance() {
        let catalog = font_catalog();
        let font = FontSpec::helvetica(FontStyle::Normal, 10.0);
        assert!((catalog.text_width("é", &font) - 5.56).abs() < 0.001);
    }

    #[test]
    fn provisioning_always_yields_the_same_catalog() {
        assert!(std::ptr::eq(font_catalog(), font_catalog()));
    }
}
