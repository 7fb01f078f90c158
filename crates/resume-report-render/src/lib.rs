//! Backend-agnostic layout and composition for `resume-report`.
//!
//! The composer lays an [`AnalysisResult`](resume_report::AnalysisResult)
//! out into a fixed-size paginated document: paragraphs wrap, skill chips
//! flow into rows, and a vertical cursor inserts page breaks exactly when
//! content would overflow. Drawing goes through the [`RenderBackend`]
//! capability; this crate never touches files or fonts itself.

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

mod backend;
mod chips;
mod composer;
mod error;
mod flow;
mod geometry;
mod measure;
mod wrap;

pub use backend::{Color, FontSpec, FontStyle, RectSpec, RenderBackend};
pub use chips::{flow_chips, Chip, ChipFlowConfig, ChipLayout, ChipPosition};
pub use composer::{compose_report, ReportComposer, REPORT_FILE_NAME};
pub use error::RenderError;
pub use flow::{BreakPolicy, PageFlow};
pub use geometry::{PageGeometry, A4_HEIGHT_PT, A4_WIDTH_PT, DEFAULT_MARGIN_PT};
pub use measure::TextMeasurer;
pub use wrap::wrap_text;
