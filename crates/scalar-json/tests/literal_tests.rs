use scalar_json::{parse, parse_status, ParseError, ParseStatus, TypeTag, Value};

fn assert_literal(json: &str, expected: TypeTag) {
    let value = parse(json).unwrap_or_else(|e| panic!("parse({json:?}) failed: {e}"));
    assert_eq!(value.get_type(), expected, "wrong type for {json:?}");
}

// ============================================================================
// Well-formed literals
// ============================================================================

#[test]
fn parse_null() {
    assert_literal("null", TypeTag::Null);
}

#[test]
fn parse_true() {
    assert_literal("true", TypeTag::True);
}

#[test]
fn parse_false() {
    assert_literal("false", TypeTag::False);
}

#[test]
fn literals_surrounded_by_whitespace() {
    assert_literal(" null ", TypeTag::Null);
    assert_literal("\ttrue\t", TypeTag::True);
    assert_literal("\r\n false \r\n", TypeTag::False);
}

#[test]
fn literal_values_are_exact_variants() {
    assert_eq!(parse("true"), Ok(Value::True));
    assert_eq!(parse("false"), Ok(Value::False));
    assert_eq!(parse("null"), Ok(Value::Null));
}

// ============================================================================
// Malformed literals
// ============================================================================

#[test]
fn truncated_literals_are_invalid() {
    assert_eq!(parse("tru"), Err(ParseError::InvalidValue { offset: 0 }));
    assert_eq!(parse("fals"), Err(ParseError::InvalidValue { offset: 0 }));
    assert_eq!(parse("nul"), Err(ParseError::InvalidValue { offset: 0 }));
    assert_eq!(parse("t"), Err(ParseError::InvalidValue { offset: 0 }));
}

#[test]
fn misspelled_literals_are_invalid() {
    assert_eq!(parse("trUe"), Err(ParseError::InvalidValue { offset: 0 }));
    assert_eq!(parse("fAlse"), Err(ParseError::InvalidValue { offset: 0 }));
    assert_eq!(parse("nil"), Err(ParseError::InvalidValue { offset: 0 }));
}

#[test]
fn literal_offset_points_at_literal_start() {
    assert_eq!(parse("   nul"), Err(ParseError::InvalidValue { offset: 3 }));
}

#[test]
fn literal_words_starting_with_other_letters_are_invalid() {
    // Only t/f/n dispatch to the literal matcher; the rest reach the number scanner.
    assert_eq!(parse("True"), Err(ParseError::InvalidValue { offset: 0 }));
    assert_eq!(parse("NULL"), Err(ParseError::InvalidValue { offset: 0 }));
    assert_eq!(parse("?"), Err(ParseError::InvalidValue { offset: 0 }));
}

#[test]
fn nan_spelling_is_an_invalid_literal() {
    assert_eq!(parse_status("nan"), (Value::Null, ParseStatus::InvalidValue));
}

// ============================================================================
// Trailing content after a literal
// ============================================================================

#[test]
fn extra_letter_after_literal_is_root_not_singular() {
    assert_eq!(parse("truee"), Err(ParseError::RootNotSingular { offset: 4 }));
    assert_eq!(parse("falsey"), Err(ParseError::RootNotSingular { offset: 5 }));
}

#[test]
fn two_literals_are_root_not_singular() {
    assert_eq!(parse("nullnull"), Err(ParseError::RootNotSingular { offset: 4 }));
    assert_eq!(parse("true false"), Err(ParseError::RootNotSingular { offset: 5 }));
}

#[test]
fn root_not_singular_resets_value_to_null() {
    assert_eq!(
        parse_status("true x"),
        (Value::Null, ParseStatus::RootNotSingular)
    );
}
