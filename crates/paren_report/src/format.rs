//! Output format selection.

use paren_core::AnalysisResult;

use crate::{render_text, Locale};

/// How a report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Localized, human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    /// Parse from command line string.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Render `result` as a single-line JSON object.
///
/// All four fields are always present, including the move count of
/// unbalanced sequences.
pub fn render_json(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Render `result` in `format`. The locale only affects text output.
///
/// Text output always ends with a newline; JSON output never does.
pub fn render(
    result: &AnalysisResult,
    format: OutputFormat,
    locale: Locale,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(result, locale)),
        OutputFormat::Json => render_json(result),
    }
}

#[cfg(test)]
mod tests;
