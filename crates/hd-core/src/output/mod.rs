//! Rendering of inference results.
//!
//! - [`text`]: the per-person listing printed by default
//! - [`report`]: the JSON report with run and model metadata

pub mod report;
pub mod text;

pub use report::{InferenceReport, ModelSummary};
pub use text::{render_text, TextReport, DEFAULT_PRECISION};
