//! Paren CLI
//!
//! Bracket balance analysis from the command line.

use std::io;
use std::process::ExitCode;

use paren_cli::{init_tracing, parse_args, run_analyze, write_usage, Command, LANG_ENV};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_lang = std::env::var(LANG_ENV).ok();

    let command = match parse_args(&args, env_lang.as_deref()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            // Best effort; the exit code already reports the failure.
            let _ = write_usage(&mut io::stderr().lock());
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Help => match write_usage(&mut io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        },
        Command::Version => {
            println!("paren {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Command::Analyze(config) => {
            for warning in &config.warnings {
                eprintln!("warning: {warning}");
            }

            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            let mut stderr = io::stderr().lock();
            match run_analyze(&config, stdin.lock(), &mut stdout, &mut stderr) {
                Ok(outcome) => ExitCode::from(outcome.exit_code(config.strict)),
                Err(e) => {
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
