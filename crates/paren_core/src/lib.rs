//! Balance analysis for sequences of `(` and `)`.
//!
//! The analysis walks a sequence once, tracking a running balance that
//! rises by one on `(` and falls by one on `)`. From that balance mask it
//! derives two metrics:
//!
//! - **balanced**: the final running balance is zero (an empty sequence is
//!   vacuously balanced). Only the net balance is inspected, so `")("` is
//!   reported as balanced.
//! - **moves required**: the absolute value of the lowest running balance,
//!   i.e. how many leading `)` would have to flip to `(` for the balance to
//!   never dip below zero.
//!
//! # Entry Points
//!
//! - [`analyze`] / [`analyze_from`]: pure functions producing an
//!   [`AnalysisResult`] with the mask and both metrics computed together.
//! - [`balance_mask`] / [`balance_mask_from`]: the eager mask alone.
//! - [`Balances`]: the lazy, fail-fast iterator underlying everything else.
//! - [`BalanceAnalyzer`]: a holder for the most recently analyzed sequence.
//!
//! Any character other than `(` or `)` aborts the analysis with an
//! [`InvalidCharacterError`]; no partial mask is ever returned.

mod analysis;
mod analyzer;
mod bracket;
mod error;
mod mask;

pub use analysis::{analyze, analyze_from, is_balanced, moves_required, AnalysisResult};
pub use analyzer::BalanceAnalyzer;
pub use bracket::Bracket;
pub use error::InvalidCharacterError;
pub use mask::{balance_mask, balance_mask_from, Balances};
