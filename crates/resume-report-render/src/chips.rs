use crate::error::RenderError;

/// A measured chip awaiting placement.
#[derive(Clone, Debug, PartialEq)]
pub struct Chip {
    /// Rendered label text.
    pub label: String,
    /// Full chip width including padding.
    pub width: f32,
}

/// Geometry for one chip-flow invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipFlowConfig {
    /// Left edge every row starts at.
    pub start_x: f32,
    /// Baseline row height of the first row.
    pub start_y: f32,
    /// Right edge chips may not cross, except first-in-row overflow.
    pub right_limit: f32,
    /// Vertical distance between rows.
    pub row_height: f32,
    /// Horizontal gap between chips within a row.
    pub gap: f32,
}

/// Origin assigned to one chip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipPosition {
    pub x: f32,
    pub y: f32,
}

/// Placements plus the cursor left after the last chip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChipLayout {
    /// One position per input chip, in order.
    pub positions: Vec<ChipPosition>,
    /// Horizontal cursor after the last chip and its trailing gap.
    pub final_x: f32,
    /// Row the last chip landed on.
    pub final_y: f32,
}

/// Flow chips left-to-right, wrapping to a new row when one would cross
/// `right_limit`.
///
/// A chip wider than the whole row is still placed when it is first on its
/// row (accepted overflow; there is no splitting fallback). No backtracking
/// and no re-balancing: identical input always yields identical placement.
pub fn flow_chips(chips: &[Chip], cfg: &ChipFlowConfig) -> Result<ChipLayout, RenderError> {
    if cfg.row_height <= 0.0 {
        return Err(RenderError::InvalidLayout {
            what: "chip row height",
            value: cfg.row_height,
        });
    }
    let row_width = cfg.right_limit - cfg.start_x;
    if row_width <= 0.0 {
        return Err(RenderError::InvalidLayout {
            what: "chip row width",
            value: row_width,
        });
    }

    let mut positions = Vec::with_capacity(chips.len());
    let mut cx = cfg.start_x;
    let mut cy = cfg.start_y;
    for chip in chips {
        if cx + chip.width > cfg.right_limit && cx > cfg.start_x {
            cx = cfg.start_x;
            cy += cfg.row_height;
        }
        positions.push(ChipPosition { x: cx, y: cy });
        cx += chip.width + cfg.gap;
    }
    Ok(ChipLayout {
        positions,
        final_x: cx,
        final_y: cy,
    })
}

#[cfg(test)]
mod tests {
    use super::{flow_chips, Chip, ChipFlowConfig};
    use crate::error::RenderError;

    fn chip(label: &str, width: f32) -> Chip {
        Chip {
            label: label.to_string(),
            width,
        }
    }

    fn config() -> ChipFlowConfig {
        ChipFlowConfig {
            start_x: 40.0,
            start_y: 100.0,
            right_limit: 140.0,
            row_height: 22.0,
            gap: 8.0,
        }
    }

    #[test]
    fn chips_advance_by_width_plus_gap_within_a_row() {
        let chips = vec![chip("a", 30.0), chip("b", 20.0)];
        let layout = flow_chips(&chips, &config()).unwrap();
        assert_eq!(layout.positions[0].x, 40.0);
        assert_eq!(layout.positions[1].x, 78.0);
        assert_eq!(layout.positions[0].y, layout.positions[1].y);
        assert_eq!(layout.final_x, 106.0);
        assert_eq!(layout.final_y, 100.0);
    }

    #[test]
    fn overflowing_chip_wraps_to_a_fresh_row() {
        let chips = vec![chip("a", 60.0), chip("b", 60.0)];
        let layout = flow_chips(&chips, &config()).unwrap();
        assert_eq!(layout.positions[0].y, 100.0);
        assert_eq!(layout.positions[1].x, 40.0);
        assert_eq!(layout.positions[1].y, 122.0);
        assert_eq!(layout.final_y, 122.0);
    }

    #[test]
    fn first_chip_on_a_row_may_overflow_the_right_limit() {
        let chips = vec![chip("wide", 500.0), chip("b", 20.0)];
        let layout = flow_chips(&chips, &config()).unwrap();
        assert_eq!(layout.positions[0].x, 40.0);
        assert_eq!(layout.positions[0].y, 100.0);
        assert_eq!(layout.positions[1].y, 122.0);
    }

    #[test]
    fn no_chip_starts_left_of_start_x() {
        let chips: Vec<Chip> = (0..12).map(|i| chip("c", 25.0 + i as f32)).collect();
        let layout = flow_chips(&chips, &config()).unwrap();
        for position in &layout.positions {
            assert!(position.x >= 40.0);
        }
    }

    #[test]
    fn placement_is_deterministic() {
        let chips = vec![chip("a", 33.0), chip("b", 47.0), chip("c", 21.0)];
        let first = flow_chips(&chips, &config()).unwrap();
        let second = flow_chips(&chips, &config()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_keeps_the_cursor_at_the_origin() {
        let layout = flow_chips(&[], &config()).unwrap();
        assert!(layout.positions.is_empty());
        assert_eq!(layout.final_x, 40.0);
        assert_eq!(layout.final_y, 100.0);
    }

    #[test]
    fn degenerate_geometry_is_rejected() {
        let mut cfg = config();
        cfg.row_height = 0.0;
        assert!(matches!(
            flow_chips(&[chip("a", 10.0)], &cfg),
            Err(RenderError::InvalidLayout {
                what: "chip row height",
                ..
            })
        ));
        let mut cfg = config();
        cfg.right_limit = cfg.start_x;
        assert!(matches!(
            flow_chips(&[chip("a", 10.0)], &cfg),
            Err(RenderError::InvalidLayout {
                what: "chip row width",
                ..
            })
        ));
    }
}
