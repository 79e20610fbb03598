use pretty_assertions::assert_eq;

use super::*;

// === Eager Mask ===

#[test]
fn empty_sequence_yields_empty_mask() {
    assert_eq!(balance_mask(""), Ok(vec![]));
}

#[test]
fn nested_sequence() {
    assert_eq!(balance_mask("(()())"), Ok(vec![1, 2, 1, 2, 1, 0]));
}

#[test]
fn dips_below_zero() {
    assert_eq!(balance_mask(")()("), Ok(vec![-1, 0, -1, 0]));
}

#[test]
fn unclosed_sequence_ends_positive() {
    assert_eq!(balance_mask("(()"), Ok(vec![1, 2, 1]));
}

#[test]
fn initial_balance_offsets_every_element() {
    assert_eq!(balance_mask_from("))", 2), Ok(vec![1, 0]));
    assert_eq!(balance_mask_from("(", -3), Ok(vec![-2]));
}

#[test]
fn suffix_continues_prefix_mask() {
    let whole = balance_mask("(()))(")
        .unwrap_or_else(|e| panic!("mask failed: {e}"));
    let prefix = balance_mask("(()")
        .unwrap_or_else(|e| panic!("mask failed: {e}"));
    let suffix = balance_mask_from("))(", prefix[prefix.len() - 1])
        .unwrap_or_else(|e| panic!("mask failed: {e}"));
    assert_eq!(whole.len(), 6);
    assert_eq!(&whole[prefix.len()..], suffix.as_slice());
}

// === Invalid Characters ===

#[test]
fn invalid_character_aborts_whole_mask() {
    assert_eq!(
        balance_mask("(a)"),
        Err(InvalidCharacterError::new('a', 1))
    );
}

#[test]
fn invalid_character_at_start() {
    assert_eq!(
        balance_mask(" ()"),
        Err(InvalidCharacterError::new(' ', 0))
    );
}

#[test]
fn multibyte_character_is_rejected_at_its_position() {
    assert_eq!(
        balance_mask("()→)"),
        Err(InvalidCharacterError::new('→', 2))
    );
}

#[test]
fn other_bracket_kinds_are_invalid() {
    assert_eq!(
        balance_mask("([])"),
        Err(InvalidCharacterError::new('[', 1))
    );
}

// === Lazy Iterator ===

#[test]
fn iterator_yields_balances_then_error() {
    let mut balances = Balances::new("((x");
    assert_eq!(balances.next(), Some(Ok(1)));
    assert_eq!(balances.next(), Some(Ok(2)));
    assert_eq!(
        balances.next(),
        Some(Err(InvalidCharacterError::new('x', 2)))
    );
}

#[test]
fn iterator_stops_after_first_error() {
    let mut balances = Balances::new("(a)b");
    assert_eq!(balances.next(), Some(Ok(1)));
    assert!(matches!(balances.next(), Some(Err(_))));
    assert_eq!(balances.next(), None);
    assert_eq!(balances.next(), None);
    assert_eq!(balances.size_hint(), (0, Some(0)));
}

#[test]
fn iterator_tracks_running_balance() {
    let mut balances = Balances::with_initial("()(", 5);
    assert_eq!(balances.balance(), 5);
    let _ = balances.next();
    assert_eq!(balances.balance(), 6);
    let rest: Vec<_> = balances.by_ref().collect();
    assert_eq!(rest, vec![Ok(5), Ok(6)]);
    assert_eq!(balances.balance(), 6);
}

#[test]
fn iterator_is_lazy() {
    // The invalid tail is never reached when only a prefix is consumed.
    let first_two: Vec<_> = Balances::new("((\u{1F600}").take(2).collect();
    assert_eq!(first_two, vec![Ok(1), Ok(2)]);
}

#[test]
fn balance_saturates_at_bounds() {
    assert_eq!(balance_mask_from("(", i64::MAX), Ok(vec![i64::MAX]));
    assert_eq!(balance_mask_from(")", i64::MIN), Ok(vec![i64::MIN]));
}
