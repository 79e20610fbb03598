use paren_core::analyze;
use pretty_assertions::assert_eq;

use super::*;

fn analyzed(seq: &str) -> AnalysisResult {
    analyze(seq).unwrap_or_else(|e| panic!("{e}"))
}

#[test]
fn parses_format_names() {
    assert_eq!(OutputFormat::from_name("text"), Some(OutputFormat::Text));
    assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::from_name("yaml"), None);
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn json_has_all_fields_in_declaration_order() {
    let json = render_json(&analyzed("(()"))
        .unwrap_or_else(|e| panic!("serialization failed: {e}"));
    assert_eq!(
        json,
        r#"{"sequence":"(()","balance_mask":[1,2,1],"is_balanced":false,"moves_required":1}"#
    );
}

#[test]
fn json_is_single_line() {
    let json = render_json(&analyzed("()()"))
        .unwrap_or_else(|e| panic!("serialization failed: {e}"));
    assert!(!json.contains('\n'));
}

#[test]
fn render_dispatches_on_format() {
    let result = analyzed("()");
    assert_eq!(
        render(&result, OutputFormat::Text, Locale::English).ok(),
        Some(render_text(&result, Locale::English))
    );
    assert_eq!(
        render(&result, OutputFormat::Json, Locale::Russian).ok(),
        render_json(&result).ok()
    );
}
