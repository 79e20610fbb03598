//! `paren` command line front end.
//!
//! Parses arguments into a [`CliConfig`], analyzes each sequence with
//! `paren_core`, and prints reports with `paren_report`. The binary in
//! `main.rs` only wires process state (arguments, environment, standard
//! streams, exit code) into these functions.

mod commands;
mod config;
mod logging;
mod usage;

pub use commands::{run_analyze, Outcome};
pub use config::{parse_args, CliConfig, Command, ConfigError, LANG_ENV};
pub use logging::init_tracing;
pub use usage::write_usage;
