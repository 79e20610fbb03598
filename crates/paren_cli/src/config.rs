//! Command line and environment configuration.
//!
//! Precedence, lowest to highest: built-in defaults, the `PAREN_LANG`
//! environment variable, command line flags. An unrecognized option value
//! is not fatal: it is recorded as a warning and the previous value kept.

use paren_report::{Locale, OutputFormat};
use thiserror::Error;

/// Environment variable selecting the default report language.
pub const LANG_ENV: &str = "PAREN_LANG";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Analyze(CliConfig),
}

/// Settings for an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliConfig {
    pub locale: Locale,
    pub format: OutputFormat,
    /// Balance the mask starts from.
    pub initial_balance: i64,
    /// Fail when any analyzed sequence is not balanced.
    pub strict: bool,
    /// Sequences given as arguments, in order.
    pub sequences: Vec<String>,
    /// Read one sequence per line from stdin after the argument sequences.
    pub read_stdin: bool,
    /// Non-fatal problems found while parsing.
    pub warnings: Vec<String>,
}

/// Fatal command line errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{arg}' after '{command}'")]
    UnexpectedArgument { command: &'static str, arg: String },
}

/// Parse process arguments (without the program name).
///
/// `env_lang` is the value of [`LANG_ENV`], if set.
pub fn parse_args(args: &[String], env_lang: Option<&str>) -> Result<Command, ConfigError> {
    match args.first().map(String::as_str) {
        Some("help" | "--help" | "-h") => return no_trailing("help", args).map(|()| Command::Help),
        Some("version" | "--version" | "-V") => {
            return no_trailing("version", args).map(|()| Command::Version);
        }
        _ => {}
    }

    let mut config = CliConfig::default();

    if let Some(lang) = env_lang {
        match Locale::from_name(lang) {
            Some(locale) => config.locale = locale,
            None => config
                .warnings
                .push(format!("unknown language '{lang}' in {LANG_ENV}, using en")),
        }
    }

    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        if arg == "--" {
            config.sequences.extend(rest.by_ref().cloned());
        } else if arg == "-" {
            config.read_stdin = true;
        } else if arg == "--strict" {
            config.strict = true;
        } else if let Some(lang) = arg.strip_prefix("--lang=") {
            if let Some(locale) = Locale::from_name(lang) {
                config.locale = locale;
            } else {
                config.warnings.push(format!(
                    "unknown language '{lang}', using {}",
                    config.locale.code()
                ));
            }
        } else if let Some(format) = arg.strip_prefix("--format=") {
            if let Some(f) = OutputFormat::from_name(format) {
                config.format = f;
            } else {
                config
                    .warnings
                    .push(format!("unknown format '{format}', options: text, json"));
            }
        } else if let Some(offset) = arg.strip_prefix("--offset=") {
            match offset.parse::<i64>() {
                Ok(initial) => config.initial_balance = initial,
                Err(_) => config
                    .warnings
                    .push(format!("invalid offset '{offset}', using 0")),
            }
        } else if arg.starts_with('-') {
            return Err(ConfigError::UnknownOption(arg.clone()));
        } else {
            config.sequences.push(arg.clone());
        }
    }

    if config.sequences.is_empty() {
        config.read_stdin = true;
    }

    Ok(Command::Analyze(config))
}

fn no_trailing(command: &'static str, args: &[String]) -> Result<(), ConfigError> {
    match args.get(1) {
        Some(arg) => Err(ConfigError::UnexpectedArgument {
            command,
            arg: arg.clone(),
        }),
        None => Ok(()),
    }
}
