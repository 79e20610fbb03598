//! The analyze command.

use std::io::{self, BufRead, Write};

use paren_core::analyze_from;
use paren_report::render;
use tracing::{debug, info};

use crate::CliConfig;

/// Tally of one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Sequences analyzed successfully.
    pub analyzed: usize,
    /// Sequences rejected for containing an invalid character.
    pub invalid: usize,
    /// Analyzed sequences that were not balanced.
    pub unbalanced: usize,
}

impl Outcome {
    /// Process exit code for this outcome.
    ///
    /// Invalid input always fails; unbalanced input only fails in strict mode.
    pub fn exit_code(&self, strict: bool) -> u8 {
        if self.invalid > 0 || (strict && self.unbalanced > 0) {
            1
        } else {
            0
        }
    }
}

/// Analyze every configured sequence, writing reports to `out` and
/// per-sequence errors to `err`.
///
/// Argument sequences come first, then stdin lines when
/// [`CliConfig::read_stdin`] is set. Blank stdin lines are skipped. An
/// invalid sequence, including a stdin line that is not valid UTF-8, is
/// reported and the run continues with the next one.
pub fn run_analyze<R, W, E>(
    config: &CliConfig,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<Outcome>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    debug!(
        locale = ?config.locale,
        format = ?config.format,
        initial = config.initial_balance,
        "starting analysis run"
    );
    let mut outcome = Outcome::default();

    for sequence in &config.sequences {
        analyze_one(config, sequence, &mut outcome, out, err)?;
    }

    if config.read_stdin {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Undecodable bytes become U+FFFD and are rejected per sequence.
            let line = String::from_utf8_lossy(&buf);
            let sequence = line.trim_end_matches(['\n', '\r']);
            if sequence.is_empty() {
                continue;
            }
            analyze_one(config, sequence, &mut outcome, out, err)?;
        }
    }

    out.flush()?;
    info!(
        analyzed = outcome.analyzed,
        invalid = outcome.invalid,
        unbalanced = outcome.unbalanced,
        "analysis run complete"
    );
    Ok(outcome)
}

fn analyze_one<W: Write, E: Write>(
    config: &CliConfig,
    sequence: &str,
    outcome: &mut Outcome,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    let result = match analyze_from(sequence, config.initial_balance) {
        Ok(result) => result,
        Err(e) => {
            outcome.invalid += 1;
            return writeln!(err, "error: {e} in \"{sequence}\"");
        }
    };

    outcome.analyzed += 1;
    if !result.is_balanced() {
        outcome.unbalanced += 1;
    }

    let report = render(&result, config.format, config.locale)?;
    if report.ends_with('\n') {
        out.write_all(report.as_bytes())
    } else {
        writeln!(out, "{report}")
    }
}
