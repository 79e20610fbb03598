//! Usage text for the `paren` binary.

use std::io::{self, Write};

use crate::LANG_ENV;

/// Write the usage block to `w`.
///
/// `--help` sends it to stdout; usage errors send it to stderr so stdout
/// only ever carries reports.
pub fn write_usage<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "Paren (bracket balance analysis)")?;
    writeln!(w)?;
    writeln!(w, "Usage: paren [options] [sequence...]")?;
    writeln!(w)?;
    writeln!(w, "Each sequence is made of '(' and ')'. With no sequences, or with '-',")?;
    writeln!(w, "one sequence per line is read from stdin.")?;
    writeln!(w)?;
    writeln!(w, "Commands:")?;
    writeln!(w, "  help                Show this help message")?;
    writeln!(w, "  version             Show version information")?;
    writeln!(w)?;
    writeln!(w, "Options:")?;
    writeln!(w, "  --lang=<code>       Report language: en (default), ru")?;
    writeln!(w, "  --format=<fmt>      Output format: text (default), json")?;
    writeln!(w, "  --offset=<n>        Initial balance (default: 0)")?;
    writeln!(w, "  --strict            Exit 1 if any sequence is not balanced")?;
    writeln!(w, "  --                  Treat all remaining arguments as sequences")?;
    writeln!(w)?;
    writeln!(w, "Environment:")?;
    writeln!(w, "  {LANG_ENV}          Default report language")?;
    writeln!(w, "  RUST_LOG            Enable tracing output on stderr")?;
    writeln!(w)?;
    writeln!(w, "Examples:")?;
    writeln!(w, "  paren '(()()()())'")?;
    writeln!(w, "  paren --lang=ru ')()('")?;
    writeln!(w, "  paren --format=json < sequences.txt")
}

#[cfg(test)]
mod tests;
