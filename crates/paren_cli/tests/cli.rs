//! End-to-end tests: argument parsing through rendered output.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use paren_cli::{parse_args, run_analyze, CliConfig, Command};

fn config(args: &[&str], env_lang: Option<&str>) -> CliConfig {
    let args: Vec<String> = args.iter().map(|s| (*s).to_string()).collect();
    match parse_args(&args, env_lang).unwrap() {
        Command::Analyze(config) => config,
        other => panic!("expected analyze command, got {other:?}"),
    }
}

fn run(config: &CliConfig, stdin: &str) -> (u8, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = run_analyze(config, stdin.as_bytes(), &mut out, &mut err).unwrap();
    (
        outcome.exit_code(config.strict),
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn documented_scenarios() {
    let cfg = config(&["--format=json", "", "()", "(()", ")(", "(()()()())", ")()("], None);
    let (code, out, err) = run(&cfg, "");
    assert_eq!(code, 0);
    assert!(err.is_empty());

    let flags: Vec<(bool, u64)> = out
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            (
                value["is_balanced"].as_bool().unwrap(),
                value["moves_required"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        flags,
        vec![
            (true, 0),
            (true, 0),
            (false, 1),
            (true, 1),
            (true, 0),
            (true, 1),
        ]
    );
}

#[test]
fn invalid_input_fails_the_run() {
    let cfg = config(&["(a)"], None);
    let (code, out, err) = run(&cfg, "");
    assert_eq!(code, 1);
    assert!(out.is_empty());
    assert!(err.contains("invalid character 'a' at index 1"));
}

#[test]
fn strict_mode_fails_on_unbalanced() {
    let lenient = config(&["(("], None);
    assert_eq!(run(&lenient, "").0, 0);

    let strict = config(&["--strict", "(("], None);
    assert_eq!(run(&strict, "").0, 1);
}

#[test]
fn russian_report_from_env() {
    let cfg = config(&[], Some("ru"));
    let (code, out, _) = run(&cfg, "(()()()())\n");
    assert_eq!(code, 0);
    assert_eq!(
        out,
        "Последовательность \"(()()()())\"\n\
         Маска [1, 2, 1, 2, 1, 2, 1, 2, 1, 0]\n\
         Возможность ПСП? да\n\
         Ходов для изменения в ПСП 0\n"
    );
}

#[test]
fn usage_error_keeps_stdout_clean() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_paren"))
        .arg("--bogus")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: "));
    assert!(stderr.contains("Usage: paren [options] [sequence...]"));
}

#[test]
fn help_goes_to_stdout() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_paren"))
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Usage: paren [options] [sequence...]"));
}
