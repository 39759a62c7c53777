//! Property-based tests for the combinator algebra
//!
//! These check the laws every grammar built with charcomb relies on:
//! - a literal character consumes exactly its own character, or fails with nothing left
//! - `a + b` and `a | b` behave exactly as running `a` and `b` by hand
//! - flatten is idempotent

use charcomb::prelude::*;
use proptest::prelude::*;

/// Small alphabets make matches and mismatches both likely
fn char_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        "[abc]".prop_map(|s| s.chars().next().unwrap_or('a')),
        any::<char>(),
    ]
}

fn input_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[abc]{0,6}", ".{0,6}"]
}

/// Arbitrary successful or failed results, with nested payloads
fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = char_strategy().prop_map(Value::Char);
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::List)
    })
}

proptest! {
    #[test]
    fn char_consumes_its_own_character(c in char_strategy(), rest in input_strategy()) {
        let input = format!("{c}{rest}");
        let r = Char::new(c).parse(&input);
        prop_assert_eq!(r, ParseResult::success(c, rest.as_str()));
    }

    #[test]
    fn char_fails_with_nothing_remaining(c in char_strategy(), input in input_strategy()) {
        prop_assume!(!input.starts_with(c));
        let r = Char::new(c).parse(&input);
        prop_assert!(!r.is_success());
        prop_assert_eq!(r.remaining(), "");
        let expected = match input.chars().next() {
            None => ParseError::EmptyInput,
            Some(found) => ParseError::mismatch(c, found),
        };
        prop_assert_eq!(r.error(), Some(&expected));
    }

    #[test]
    fn sequencing_matches_running_by_hand(
        x in char_strategy(),
        y in char_strategy(),
        input in input_strategy(),
    ) {
        let (a, b) = (Char::new(x), Char::new(y));
        let combined = (a + b).parse(&input);
        let ra = a.parse(&input);
        let expected = match ra.clone().into_result() {
            Err(_) => ra,
            Ok((rest, va)) => match b.parse(rest).into_result() {
                Err(e) => ParseResult::failure(e),
                Ok((rest, vb)) => ParseResult::success(Value::List(vec![va, vb]), rest),
            },
        };
        prop_assert_eq!(combined, expected);
    }

    #[test]
    fn alternation_matches_running_by_hand(
        x in char_strategy(),
        y in char_strategy(),
        input in input_strategy(),
    ) {
        let (a, b) = (Char::new(x), Char::new(y));
        let ra = a.parse(&input);
        let expected = if ra.is_success() { ra } else { b.parse(&input) };
        prop_assert_eq!((a | b).parse(&input), expected);
    }

    #[test]
    fn flatten_is_idempotent(v in value_strategy(), rest in input_strategy(), failed in any::<bool>()) {
        let r = if failed {
            ParseResult::failure(ParseError::EmptyInput)
        } else {
            ParseResult::success(v, rest.as_str())
        };
        let once = flatten(r);
        prop_assert_eq!(flatten(once.clone()), once);
    }

    #[test]
    fn literal_sequence_matches_its_own_text(word in "[a-z]{1,8}", rest in input_strategy()) {
        let p = match_literal_sequence(word.chars()).unwrap();
        let input = format!("{word}{rest}");
        let r = p.parse(&input);
        let expected = Value::from(word.as_str());
        prop_assert_eq!(r.value(), Some(&expected));
        prop_assert_eq!(r.remaining(), rest.as_str());
    }
}

#[test]
fn literal_sequence_round_trip() {
    let p = match_literal_sequence(vec!['a', 'b', 'c']).unwrap();
    let r = p.parse("abc");
    assert!(r.is_success());
    assert_eq!(
        r.value(),
        Some(&Value::List(vec![
            Value::Char('a'),
            Value::Char('b'),
            Value::Char('c')
        ]))
    );
    assert_eq!(r.remaining(), "");

    let r = p.parse("abd");
    assert!(!r.is_success());
    assert_eq!(r.remaining(), "");
}

#[test]
fn any_of_reports_the_last_alternative() {
    let r = any_of(['x', 'y', 'z']).unwrap().parse("y!");
    assert_eq!(r, ParseResult::success('y', "!"));

    let r = any_of(['a', 'b']).unwrap().parse("c");
    assert!(!r.is_success());
    assert_eq!(r.remaining(), "");
    assert_eq!(r.message().unwrap(), r#"Expected "b" but got "c""#);
}

#[test]
fn empty_lists_are_rejected() {
    assert_eq!(choice(Vec::<Parser>::new()).unwrap_err(), GrammarError::EmptyChoice);
    assert_eq!(sequence(Vec::<Parser>::new()).unwrap_err(), GrammarError::EmptySequence);
}
