//! Input domain for the resume report engine.
//!
//! Decodes analysis-service payloads into the [`AnalysisResult`] the layout
//! crates consume. Decoding is deliberately lenient: absent or wrong-typed
//! fields degrade to empty defaults and never fail a report generation.

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

mod analysis;

pub use analysis::AnalysisResult;
