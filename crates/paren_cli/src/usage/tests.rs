use super::*;

#[test]
fn usage_lists_options_and_environment() {
    let mut buf = Vec::new();
    write_usage(&mut buf).unwrap_or_else(|e| panic!("io error: {e}"));
    let text = String::from_utf8_lossy(&buf);

    assert!(text.starts_with("Paren (bracket balance analysis)\n"));
    for option in ["--lang=", "--format=", "--offset=", "--strict", LANG_ENV] {
        assert!(text.contains(option), "usage is missing {option}");
    }
    assert!(text.ends_with("paren --format=json < sequences.txt\n"));
}
