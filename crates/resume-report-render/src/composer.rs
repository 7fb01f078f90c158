use resume_report::AnalysisResult;

use crate::backend::{Color, FontSpec, FontStyle, RectSpec, RenderBackend};
use crate::chips::{flow_chips, Chip, ChipFlowConfig};
use crate::error::RenderError;
use crate::flow::{BreakPolicy, PageFlow};
use crate::geometry::{PageGeometry, DEFAULT_MARGIN_PT};
use crate::wrap::wrap_text;

/// File name the finished document is saved under.
pub const REPORT_FILE_NAME: &str = "resume-analysis.pdf";

const START_Y: f32 = 48.0;
const RULE_HEIGHT: f32 = 0.6;
const CORNER_RADIUS: f32 = 6.0;

const BAR_HEIGHT: f32 = 12.0;
/// Minimum rendered fill width so a zero score still shows a sliver.
const BAR_FILL_FLOOR: f32 = 2.0;

const MISSING_VALUE_INDENT: f32 = 60.0;

const SUGGESTION_LINE_HEIGHT: f32 = 14.0;
const SUGGESTION_BLOCK_GAP: f32 = 8.0;
/// Wrap-width reserve for the ordinal marker column.
const SUGGESTION_INDENT_RESERVE: f32 = 30.0;
const SUGGESTION_TEXT_INDENT: f32 = 22.0;
const SUGGESTION_BREAKS: BreakPolicy = BreakPolicy {
    bottom_reserve: 80.0,
    restart_y: 40.0,
};

const CHIP_PADDING_X: f32 = 8.0;
const CHIP_GAP: f32 = 8.0;
const CHIP_ROW_HEIGHT: f32 = 22.0;
const CHIP_HEIGHT: f32 = 18.0;
/// Chip rect top sits this far above the row's text baseline.
const CHIP_ASCENT: f32 = 10.0;
const CHIP_BASELINE_DROP: f32 = 2.0;
const CHIP_SECTION_TAIL: f32 = 26.0;

const PREVIEW_CHAR_BUDGET: usize = 1400;
const PREVIEW_LINE_HEIGHT: f32 = 12.0;
const PREVIEW_BREAKS: BreakPolicy = BreakPolicy {
    bottom_reserve: 60.0,
    restart_y: 48.0,
};

const FOOTER_RISE: f32 = 28.0;

const TITLE_FONT: FontSpec = FontSpec::helvetica(FontStyle::Bold, 18.0);
const META_FONT: FontSpec = FontSpec::helvetica(FontStyle::Normal, 10.0);
const SCORE_LABEL_FONT: FontSpec = FontSpec::helvetica(FontStyle::Bold, 12.0);
const SCORE_VALUE_FONT: FontSpec = FontSpec::helvetica(FontStyle::Bold, 26.0);
const MISSING_LABEL_FONT: FontSpec = FontSpec::helvetica(FontStyle::Bold, 11.0);
const BODY_FONT: FontSpec = FontSpec::helvetica(FontStyle::Normal, 11.0);
const ORDINAL_FONT: FontSpec = FontSpec::helvetica(FontStyle::Bold, 11.0);
const HEADING_FONT: FontSpec = FontSpec::helvetica(FontStyle::Bold, 14.0);
const SUB_HEADING_FONT: FontSpec = FontSpec::helvetica(FontStyle::Bold, 13.0);
const CHIP_FONT: FontSpec = FontSpec::helvetica(FontStyle::Normal, 10.0);
const PREVIEW_FONT: FontSpec = FontSpec::helvetica(FontStyle::Normal, 10.0);
const FOOTER_FONT: FontSpec = FontSpec::helvetica(FontStyle::Normal, 9.0);

const TITLE_COLOR: Color = Color::gray(0);
const META_COLOR: Color = Color::gray(100);
const RULE_COLOR: Color = Color::gray(230);
const TEXT_COLOR: Color = Color::rgb(68, 68, 68);
const SCORE_VALUE_COLOR: Color = Color::rgb(51, 51, 51);
const BAR_TRACK_COLOR: Color = Color::rgb(240, 240, 245);
const BAR_FILL_COLOR: Color = Color::rgb(99, 56, 255);
const CHIP_FILL: Color = Color::rgb(245, 245, 250);
const CHIP_TEXT: Color = Color::rgb(34, 34, 34);
const SOFT_CHIP_FILL: Color = Color::rgb(255, 243, 205);
const SOFT_CHIP_TEXT: Color = Color::rgb(58, 46, 0);
const FOOTER_COLOR: Color = Color::gray(120);

const NO_MISSING: &str = "None";
const NO_SUGGESTIONS: &str = "No suggestions available.";
const NO_SKILLS: &str = "No skills detected yet.";
const NO_SOFT_SKILLS: &str = "None detected";

/// Compose `analysis` onto a fresh backend and save the result.
///
/// Convenience wrapper over [`ReportComposer`]; returns the backend after
/// a successful save.
pub fn compose_report<B: RenderBackend>(
    backend: B,
    analysis: &AnalysisResult,
    generated_at: &str,
) -> Result<B, RenderError> {
    ReportComposer::new(backend)?.compose(analysis, generated_at)
}

/// Composes the fixed section sequence onto a rendering backend.
///
/// One composer drives one generation run: sections draw in a fixed order,
/// geometry never changes mid-document, and any backend failure aborts the
/// whole run without a partial document.
pub struct ReportComposer<B> {
    backend: B,
    geo: PageGeometry,
    flow: PageFlow,
}

impl<B: RenderBackend> ReportComposer<B> {
    /// Build a composer over a fresh backend surface.
    pub fn new(backend: B) -> Result<Self, RenderError> {
        let geo = PageGeometry::new(
            backend.page_width(),
            backend.page_height(),
            DEFAULT_MARGIN_PT,
        )?;
        let flow = PageFlow::new(geo.page_height(), START_Y);
        Ok(Self { backend, geo, flow })
    }

    /// Compose every section in order and save as [`REPORT_FILE_NAME`].
    pub fn compose(
        mut self,
        analysis: &AnalysisResult,
        generated_at: &str,
    ) -> Result<B, RenderError> {
        self.draw_header(generated_at)?;
        self.draw_score(analysis.ats_score)?;
        self.draw_missing_line(&analysis.missing_skills_job)?;
        self.draw_suggestions(&analysis.suggestions)?;
        self.draw_chip_section(
            "Technical skills",
            &analysis.skills_found,
            NO_SKILLS,
            CHIP_FILL,
            CHIP_TEXT,
        )?;
        self.draw_chip_section(
            "Soft skills",
            &analysis.soft_skills_found,
            NO_SOFT_SKILLS,
            SOFT_CHIP_FILL,
            SOFT_CHIP_TEXT,
        )?;
        self.draw_preview(&analysis.raw_text_preview)?;
        self.draw_footer()?;
        self.backend.save(REPORT_FILE_NAME)?;
        log::debug!("report composed across {} pages", self.flow.page_count());
        Ok(self.backend)
    }

    fn draw_header(&mut self, generated_at: &str) -> Result<(), RenderError> {
        let margin = self.geo.margin();
        self.backend.draw_text(
            "Resume Analysis Report",
            margin,
            self.flow.y(),
            &TITLE_FONT,
            TITLE_COLOR,
        )?;
        self.flow.advance(20.0);

        let stamp = format!("Generated: {generated_at}");
        self.backend
            .draw_text(&stamp, margin, self.flow.y(), &META_FONT, META_COLOR)?;
        self.flow.advance(18.0);

        self.backend.draw_rect(&RectSpec {
            x: margin,
            y: self.flow.y(),
            width: self.geo.content_width(),
            height: RULE_HEIGHT,
            corner_radius: 0.0,
            fill: RULE_COLOR,
        })?;
        self.flow.advance(18.0);
        Ok(())
    }

    fn draw_score(&mut self, score: f32) -> Result<(), RenderError> {
        let margin = self.geo.margin();
        self.backend.draw_text(
            "ATS Score",
            margin,
            self.flow.y(),
            &SCORE_LABEL_FONT,
            TEXT_COLOR,
        )?;

        let value = format_score(score);
        let value_width = self.backend.text_width(&value, &SCORE_VALUE_FONT)?;
        let value_x = self.geo.page_width() - margin - 20.0 - value_width;
        self.backend.draw_text(
            &value,
            value_x,
            self.flow.y() - 8.0,
            &SCORE_VALUE_FONT,
            SCORE_VALUE_COLOR,
        )?;
        self.flow.advance(18.0);

        let track_width = self.geo.content_width();
        self.backend.draw_rect(&RectSpec {
            x: margin,
            y: self.flow.y(),
            width: track_width,
            height: BAR_HEIGHT,
            corner_radius: CORNER_RADIUS,
            fill: BAR_TRACK_COLOR,
        })?;
        // Only the fraction's upper bound is clamped; the floor applies to
        // the rendered width, never to the score itself.
        let fill_width = ((score / 100.0).min(1.0) * track_width).max(BAR_FILL_FLOOR);
        self.backend.draw_rect(&RectSpec {
            x: margin,
            y: self.flow.y(),
            width: fill_width,
            height: BAR_HEIGHT,
            corner_radius: CORNER_RADIUS,
            fill: BAR_FILL_COLOR,
        })?;
        self.flow.advance(BAR_HEIGHT + 18.0);
        Ok(())
    }

    fn draw_missing_line(&mut self, missing: &[String]) -> Result<(), RenderError> {
        let margin = self.geo.margin();
        let joined = if missing.is_empty() {
            NO_MISSING.to_string()
        } else {
            missing.join(", ")
        };
        self.backend.draw_text(
            "Missing:",
            margin,
            self.flow.y(),
            &MISSING_LABEL_FONT,
            TEXT_COLOR,
        )?;
        // Fixed position regardless of length; a long list runs past the
        // right margin rather than wrapping.
        self.backend.draw_text(
            &joined,
            margin + MISSING_VALUE_INDENT,
            self.flow.y(),
            &BODY_FONT,
            TEXT_COLOR,
        )?;
        self.flow.advance(22.0);
        Ok(())
    }

    fn draw_suggestions(&mut self, suggestions: &[String]) -> Result<(), RenderError> {
        let margin = self.geo.margin();
        self.backend.draw_text(
            "Actionable suggestions",
            margin,
            self.flow.y(),
            &HEADING_FONT,
            TEXT_COLOR,
        )?;
        self.flow.advance(14.0);

        if suggestions.is_empty() {
            let lines = wrap_text(
                &mut self.backend,
                NO_SUGGESTIONS,
                &BODY_FONT,
                self.geo.content_width(),
            )?;
            self.draw_lines(&lines, margin, SUGGESTION_LINE_HEIGHT, &BODY_FONT, TEXT_COLOR)?;
            self.flow
                .advance(lines.len() as f32 * SUGGESTION_LINE_HEIGHT + SUGGESTION_BLOCK_GAP);
        } else {
            let wrap_width = self.geo.content_width() - SUGGESTION_INDENT_RESERVE;
            for (index, suggestion) in suggestions.iter().enumerate() {
                let lines = wrap_text(&mut self.backend, suggestion, &BODY_FONT, wrap_width)?;
                let block_height =
                    lines.len() as f32 * SUGGESTION_LINE_HEIGHT + SUGGESTION_BLOCK_GAP;
                // The whole block is reserved up front so an item never
                // splits across a page boundary.
                self.flow
                    .ensure_space(&mut self.backend, block_height, &SUGGESTION_BREAKS)?;
                let ordinal = format!("{}. ", index + 1);
                self.backend.draw_text(
                    &ordinal,
                    margin,
                    self.flow.y(),
                    &ORDINAL_FONT,
                    TEXT_COLOR,
                )?;
                self.draw_lines(
                    &lines,
                    margin + SUGGESTION_TEXT_INDENT,
                    SUGGESTION_LINE_HEIGHT,
                    &BODY_FONT,
                    TEXT_COLOR,
                )?;
                self.flow.advance(block_height);
            }
        }
        self.flow.advance(8.0);
        Ok(())
    }

    fn draw_chip_section(
        &mut self,
        heading: &str,
        labels: &[String],
        placeholder: &str,
        fill: Color,
        text_color: Color,
    ) -> Result<(), RenderError> {
        let margin = self.geo.margin();
        self.backend
            .draw_text(heading, margin, self.flow.y(), &SUB_HEADING_FONT, TEXT_COLOR)?;
        self.flow.advance(16.0);

        if labels.is_empty() {
            self.backend.draw_text(
                placeholder,
                margin,
                self.flow.y() + CHIP_BASELINE_DROP,
                &CHIP_FONT,
                TEXT_COLOR,
            )?;
            self.flow.advance(CHIP_SECTION_TAIL);
            return Ok(());
        }

        let mut chips = Vec::with_capacity(labels.len());
        for label in labels {
            let width = self.backend.text_width(label, &CHIP_FONT)? + 2.0 * CHIP_PADDING_X;
            chips.push(Chip {
                label: label.clone(),
                width,
            });
        }
        let layout = flow_chips(
            &chips,
            &ChipFlowConfig {
                start_x: margin,
                start_y: self.flow.y(),
                right_limit: self.geo.right_limit(),
                row_height: CHIP_ROW_HEIGHT,
                gap: CHIP_GAP,
            },
        )?;
        for (chip, position) in chips.iter().zip(&layout.positions) {
            self.backend.draw_rect(&RectSpec {
                x: position.x,
                y: position.y - CHIP_ASCENT,
                width: chip.width,
                height: CHIP_HEIGHT,
                corner_radius: CORNER_RADIUS,
                fill,
            })?;
            self.backend.draw_text(
                &chip.label,
                position.x + CHIP_PADDING_X,
                position.y + CHIP_BASELINE_DROP,
                &CHIP_FONT,
                text_color,
            )?;
        }
        let delta = layout.final_y + CHIP_SECTION_TAIL - self.flow.y();
        self.flow.advance(delta);
        Ok(())
    }

    fn draw_preview(&mut self, raw: &str) -> Result<(), RenderError> {
        // Truncation lands on the raw text, not on wrapped lines; the cut
        // may fall mid-word.
        let truncated: String = raw.chars().take(PREVIEW_CHAR_BUDGET).collect();
        if truncated.is_empty() {
            return Ok(());
        }

        let margin = self.geo.margin();
        self.backend.draw_text(
            "Resume preview (truncated)",
            margin,
            self.flow.y(),
            &SUB_HEADING_FONT,
            TEXT_COLOR,
        )?;
        self.flow.advance(16.0);

        let lines = wrap_text(
            &mut self.backend,
            &truncated,
            &PREVIEW_FONT,
            self.geo.content_width(),
        )?;
        for line in &lines {
            self.flow
                .ensure_space(&mut self.backend, PREVIEW_LINE_HEIGHT, &PREVIEW_BREAKS)?;
            self.backend
                .draw_text(line, margin, self.flow.y(), &PREVIEW_FONT, TEXT_COLOR)?;
            self.flow.advance(PREVIEW_LINE_HEIGHT);
        }
        Ok(())
    }

    fn draw_footer(&mut self) -> Result<(), RenderError> {
        let footer_y = self.geo.page_height() - FOOTER_RISE;
        self.backend.draw_text(
            "Generated by Resume Analyzer",
            self.geo.margin(),
            footer_y,
            &FOOTER_FONT,
            FOOTER_COLOR,
        )
    }

    fn draw_lines(
        &mut self,
        lines: &[String],
        x: f32,
        line_height: f32,
        font: &FontSpec,
        color: Color,
    ) -> Result<(), RenderError> {
        for (index, line) in lines.iter().enumerate() {
            let line_y = self.flow.y() + index as f32 * line_height;
            self.backend.draw_text(line, x, line_y, font, color)?;
        }
        Ok(())
    }
}

fn format_score(score: f32) -> String {
    if score.fract() == 0.0 && score.abs() < 1e7 {
        format!("{}", score as i64)
    } else {
        format!("{score}")
    }
}
