//! Tests for the strict condition clause parser.

use cldr_plurals::parser::{Operator, RangeItem, parse_condition};
use cldr_plurals::{Operand, ParseError};

// =========================================================================
// Well-formed clauses
// =========================================================================

#[test]
fn simple_equality() {
    let relation = parse_condition("n = 1").unwrap();
    assert_eq!(relation.symbol, 'n');
    assert_eq!(relation.operand(), Some(Operand::N));
    assert_eq!(relation.modulus, None);
    assert_eq!(relation.operator, Operator::Equals);
    assert_eq!(relation.values, vec![RangeItem::Value(1)]);
}

#[test]
fn modulus_and_ranges() {
    let relation = parse_condition("n % 100 != 11..19").unwrap();
    assert_eq!(relation.modulus, Some(100));
    assert_eq!(relation.operator, Operator::NotEquals);
    assert_eq!(
        relation.values,
        vec![RangeItem::Range { start: 11, end: 19 }]
    );
}

#[test]
fn legacy_mod_keyword() {
    let relation = parse_condition("i mod 10 = 1").unwrap();
    assert_eq!(relation.modulus, Some(10));
}

#[test]
fn mixed_value_list() {
    let relation = parse_condition("i = 0,1, 5..7 ,9").unwrap();
    assert_eq!(
        relation.values,
        vec![
            RangeItem::Value(0),
            RangeItem::Value(1),
            RangeItem::Range { start: 5, end: 7 },
            RangeItem::Value(9),
        ]
    );
}

#[test]
fn whitespace_is_optional() {
    assert_eq!(
        parse_condition("i%10=2..4,9").unwrap(),
        parse_condition("  i % 10 = 2..4, 9  ").unwrap()
    );
}

#[test]
fn unknown_operand_still_parses() {
    let relation = parse_condition("x = 1").unwrap();
    assert_eq!(relation.symbol, 'x');
    assert_eq!(relation.operand(), None);
}

#[test]
fn single_point_range_is_allowed() {
    let relation = parse_condition("i = 3..3").unwrap();
    assert_eq!(relation.values, vec![RangeItem::Range { start: 3, end: 3 }]);
}

#[test]
fn display_is_canonical() {
    let relation = parse_condition("i mod 10 = 2..4, 9").unwrap();
    insta::assert_snapshot!(relation.to_string(), @"i % 10 = 2..4,9");

    let relation = parse_condition("v!=0").unwrap();
    insta::assert_snapshot!(relation.to_string(), @"v != 0");
}

// =========================================================================
// Rejected clauses
// =========================================================================

#[test]
fn unknown_operator_reports_column() {
    let err = parse_condition("i is 1").unwrap_err();
    let ParseError::Syntax { column, .. } = err else {
        panic!("expected syntax error, got {err:?}");
    };
    assert_eq!(column, 3);
}

#[test]
fn column_accounts_for_leading_whitespace() {
    let err = parse_condition("   i is 1").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { column: 6, .. }));
}

#[test]
fn missing_values() {
    assert!(matches!(
        parse_condition("i = ").unwrap_err(),
        ParseError::Syntax { .. }
    ));
}

#[test]
fn trailing_garbage() {
    assert!(matches!(
        parse_condition("i = 1 x").unwrap_err(),
        ParseError::Syntax { .. }
    ));
}

#[test]
fn uppercase_operand_is_rejected() {
    assert!(matches!(
        parse_condition("N = 1").unwrap_err(),
        ParseError::Syntax { column: 1, .. }
    ));
}

#[test]
fn empty_clause_is_rejected() {
    assert!(parse_condition("").is_err());
    assert!(parse_condition("   ").is_err());
}

#[test]
fn zero_modulus_is_rejected() {
    assert_eq!(parse_condition("n % 0 = 1"), Err(ParseError::ZeroModulus));
}

#[test]
fn descending_range_is_rejected() {
    assert_eq!(
        parse_condition("i = 5..2"),
        Err(ParseError::EmptyRange { start: 5, end: 2 })
    );
}

#[test]
fn negative_values_are_rejected() {
    assert!(parse_condition("i = -1").is_err());
}

#[test]
fn error_messages_are_readable() {
    insta::assert_snapshot!(
        ParseError::EmptyRange { start: 5, end: 2 }.to_string(),
        @"range 5..2 is empty"
    );
    insta::assert_snapshot!(
        ParseError::ZeroModulus.to_string(),
        @"modulus must be a positive integer"
    );
}
