//! Whole-sequence analysis.
//!
//! [`analyze`] computes the mask, the balanced flag and the move count in a
//! single pass and hands back an immutable [`AnalysisResult`]. The free
//! functions [`is_balanced`] and [`moves_required`] stream the balances
//! without materializing the mask.

use serde::Serialize;
use tracing::debug;

use crate::mask::{balance_mask_from, Balances};
use crate::InvalidCharacterError;

/// The mask and derived metrics of one sequence.
///
/// All fields are computed together by [`analyze`] / [`analyze_from`], so a
/// result can never mix values from different sequences.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct AnalysisResult {
    sequence: String,
    balance_mask: Vec<i64>,
    is_balanced: bool,
    moves_required: u64,
}

impl AnalysisResult {
    /// The analyzed sequence, exactly as supplied.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Running balance after each character.
    pub fn balance_mask(&self) -> &[i64] {
        &self.balance_mask
    }

    /// Whether the final running balance is zero.
    ///
    /// Only the net balance is checked: `")("` is balanced by this rule even
    /// though its balance dips below zero. An empty sequence is balanced.
    pub fn is_balanced(&self) -> bool {
        self.is_balanced
    }

    /// Absolute value of the lowest running balance (0 for an empty mask).
    pub fn moves_required(&self) -> u64 {
        self.moves_required
    }

    /// Number of analyzed characters.
    pub fn len(&self) -> usize {
        self.balance_mask.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balance_mask.is_empty()
    }
}

/// Analyze `sequence` starting from a zero balance.
pub fn analyze(sequence: &str) -> Result<AnalysisResult, InvalidCharacterError> {
    analyze_from(sequence, 0)
}

/// Analyze `sequence` starting from `initial`.
///
/// The offset shifts every mask element, and both metrics are derived from
/// the shifted mask.
#[tracing::instrument(level = "debug", skip_all, fields(len = sequence.len(), initial = initial))]
pub fn analyze_from(sequence: &str, initial: i64) -> Result<AnalysisResult, InvalidCharacterError> {
    let balance_mask = balance_mask_from(sequence, initial)?;
    let is_balanced = ends_at_zero(&balance_mask);
    let moves_required = lowest_magnitude(&balance_mask);
    debug!(is_balanced, moves_required, "analysis complete");

    Ok(AnalysisResult {
        sequence: sequence.to_owned(),
        balance_mask,
        is_balanced,
        moves_required,
    })
}

/// Whether the final running balance of `sequence` is zero.
pub fn is_balanced(sequence: &str) -> Result<bool, InvalidCharacterError> {
    let mut last = 0;
    for balance in Balances::new(sequence) {
        last = balance?;
    }
    Ok(last == 0)
}

/// Absolute value of the lowest running balance of `sequence`.
pub fn moves_required(sequence: &str) -> Result<u64, InvalidCharacterError> {
    let mut lowest: Option<i64> = None;
    for balance in Balances::new(sequence) {
        let balance = balance?;
        lowest = Some(lowest.map_or(balance, |l| l.min(balance)));
    }
    Ok(lowest.map_or(0, i64::unsigned_abs))
}

fn ends_at_zero(mask: &[i64]) -> bool {
    mask.last().copied().unwrap_or(0) == 0
}

fn lowest_magnitude(mask: &[i64]) -> u64 {
    mask.iter().min().map_or(0, |lowest| lowest.unsigned_abs())
}
