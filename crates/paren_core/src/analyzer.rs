//! Analyzer holding the most recently analyzed sequence.
//!
//! # Design
//!
//! Assigning a sequence runs the full [`analyze`] first and only then
//! replaces the held result, so the mask, the flag and the move count are
//! always read from the same sequence. A failed assignment leaves the
//! previous result in place.
//!
//! # Example
//!
//! ```
//! use paren_core::BalanceAnalyzer;
//!
//! let mut analyzer = BalanceAnalyzer::new();
//! assert!(analyzer.result().is_none());
//!
//! analyzer.set_sequence(")()(").unwrap();
//! assert_eq!(analyzer.balance_mask(), Some(&[-1, 0, -1, 0][..]));
//! assert_eq!(analyzer.moves_required(), Some(1));
//!
//! assert!(analyzer.set_sequence("(x)").is_err());
//! assert_eq!(analyzer.sequence(), Some(")()("));
//! ```

use crate::{analyze, AnalysisResult, InvalidCharacterError};

/// Holds the analysis of one sequence at a time.
///
/// Starts unanalyzed; every accessor returns `None` until a sequence has
/// been assigned successfully.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BalanceAnalyzer {
    current: Option<AnalysisResult>,
}

impl BalanceAnalyzer {
    /// Create an analyzer holding no sequence.
    pub fn new() -> Self {
        BalanceAnalyzer { current: None }
    }

    /// Create an analyzer already holding the analysis of `sequence`.
    pub fn with_sequence(sequence: &str) -> Result<Self, InvalidCharacterError> {
        Ok(BalanceAnalyzer {
            current: Some(analyze(sequence)?),
        })
    }

    /// Analyze `sequence` and make it the held sequence.
    ///
    /// On error the previously held result is kept unchanged.
    pub fn set_sequence(&mut self, sequence: &str) -> Result<&AnalysisResult, InvalidCharacterError> {
        let result = analyze(sequence)?;
        Ok(&*self.current.insert(result))
    }

    /// Drop the held result, returning it if there was one.
    pub fn clear(&mut self) -> Option<AnalysisResult> {
        self.current.take()
    }

    /// Whether a sequence has been analyzed.
    pub fn is_analyzed(&self) -> bool {
        self.current.is_some()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.current.as_ref()
    }

    pub fn into_result(self) -> Option<AnalysisResult> {
        self.current
    }

    pub fn sequence(&self) -> Option<&str> {
        self.current.as_ref().map(AnalysisResult::sequence)
    }

    pub fn balance_mask(&self) -> Option<&[i64]> {
        self.current.as_ref().map(AnalysisResult::balance_mask)
    }

    pub fn is_balanced(&self) -> Option<bool> {
        self.current.as_ref().map(AnalysisResult::is_balanced)
    }

    pub fn moves_required(&self) -> Option<u64> {
        self.current.as_ref().map(AnalysisResult::moves_required)
    }
}
