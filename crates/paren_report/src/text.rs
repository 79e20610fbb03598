//! Localized text report.
//!
//! ```text
//! Sequence "(()()()())"
//! Mask [1, 2, 1, 2, 1, 2, 1, 2, 1, 0]
//! Balanced? yes
//! Moves to balance 0
//! ```
//!
//! The last line only appears for balanced sequences.

use std::fmt;

use paren_core::AnalysisResult;

use crate::Locale;

/// Displays an [`AnalysisResult`] as a labelled, line-per-field report.
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a> {
    result: &'a AnalysisResult,
    locale: Locale,
}

impl<'a> TextReport<'a> {
    pub fn new(result: &'a AnalysisResult, locale: Locale) -> Self {
        TextReport { result, locale }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.locale.labels();
        let result = self.result;

        writeln!(f, "{} \"{}\"", labels.sequence, result.sequence())?;

        write!(f, "{} [", labels.mask)?;
        for (i, balance) in result.balance_mask().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{balance}")?;
        }
        f.write_str("]\n")?;

        let verdict = if result.is_balanced() {
            labels.yes
        } else {
            labels.no
        };
        writeln!(f, "{} {verdict}", labels.balanced)?;

        if result.is_balanced() {
            writeln!(f, "{} {}", labels.moves, result.moves_required())?;
        }
        Ok(())
    }
}

/// Render the text report for `result`.
pub fn render_text(result: &AnalysisResult, locale: Locale) -> String {
    TextReport::new(result, locale).to_string()
}
