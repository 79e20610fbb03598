//! Reports for bracket balance analyses.
//!
//! A report carries four fields of an [`AnalysisResult`](paren_core::AnalysisResult):
//! the sequence, its balance mask, whether it is balanced, and the number of
//! moves required. Two renderings exist:
//!
//! - **text**: one labelled line per field in the chosen [`Locale`]. The move
//!   count line is only printed for balanced sequences.
//! - **json**: a single-line object with all four fields, suitable for JSON
//!   Lines output.

mod format;
mod locale;
mod text;

pub use format::{render, render_json, OutputFormat};
pub use locale::{Labels, Locale};
pub use text::{render_text, TextReport};
