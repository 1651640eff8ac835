//! Tests for TR35 operand extraction.

use cldr_plurals::{
    Operand, OperandsError, PluralCategory, PluralOperands, PluralRules, RuleSet,
};

fn operands(s: &str) -> PluralOperands {
    s.parse().unwrap()
}

// =========================================================================
// Operand table
// =========================================================================

#[test]
fn plain_integer() {
    let o = operands("123");
    assert_eq!(o.n(), 123.0);
    assert_eq!(o.i(), 123);
    assert_eq!((o.v(), o.w(), o.f(), o.t(), o.c()), (0, 0, 0, 0, 0));
}

#[test]
fn decimal_with_trailing_zero() {
    let o = operands("1.50");
    assert_eq!(o.n(), 1.5);
    assert_eq!(o.i(), 1);
    assert_eq!(o.v(), 2);
    assert_eq!(o.w(), 1);
    assert_eq!(o.f(), 50);
    assert_eq!(o.t(), 5);
}

#[test]
fn integer_part_is_a_value_not_a_digit_count() {
    let o = operands("123.456");
    assert_eq!(o.i(), 123);
    assert_eq!(o.f(), 456);
    assert_eq!(o.v(), 3);
}

#[test]
fn fraction_with_leading_zeros() {
    let o = operands("1.05");
    assert_eq!(o.f(), 5);
    assert_eq!(o.t(), 5);
    assert_eq!(o.v(), 2);
    assert_eq!(o.w(), 2);
}

#[test]
fn all_zero_fraction() {
    let o = operands("1.000");
    assert_eq!(o.v(), 3);
    assert_eq!(o.w(), 0);
    assert_eq!(o.f(), 0);
    assert_eq!(o.t(), 0);
}

#[test]
fn symbol_lookup_matches_documented_values() {
    assert_eq!(operands("1.50").operand('v'), Some(2.0));
    assert_eq!(operands("1.5").operand('v'), Some(1.0));
    assert_eq!(operands("1.50").operand('t'), Some(5.0));
    assert_eq!(operands("1.5c3").operand('c'), Some(3.0));
    assert_eq!(operands("1.5c3").operand('e'), Some(3.0));
}

#[test]
fn unknown_symbol_is_indeterminate() {
    assert_eq!(operands("1").operand('x'), None);
    assert_eq!(operands("1").operand('N'), None);
}

#[test]
fn operand_symbols_round_trip() {
    for operand in Operand::ALL {
        assert_eq!(Operand::from_symbol(operand.symbol()), Some(operand));
    }
}

// =========================================================================
// Compact and exponential notation
// =========================================================================

#[test]
fn compact_notation_shifts_the_decimal_point() {
    let o = operands("1.5c6");
    assert_eq!(o.n(), 1_500_000.0);
    assert_eq!(o.i(), 1_500_000);
    assert_eq!(o.v(), 0);
    assert_eq!(o.c(), 6);
}

#[test]
fn exponential_notation_is_a_synonym() {
    let o = operands("1.00001e6");
    assert_eq!(o.i(), 1_000_010);
    assert_eq!(o.v(), 0);
    assert_eq!(o.c(), 6);
}

#[test]
fn compact_notation_keeps_remaining_fraction_digits() {
    let o = operands("1.0000001c6");
    assert_eq!(o.i(), 1_000_000);
    assert_eq!(o.v(), 1);
    assert_eq!(o.f(), 1);
    assert_eq!(o.c(), 6);
}

#[test]
fn negative_exponent_moves_point_left() {
    let o = operands("15e-2");
    assert_eq!(o.i(), 0);
    assert_eq!(o.v(), 2);
    assert_eq!(o.f(), 15);
    assert_eq!(o.c(), 0);
}

#[test]
fn exponent_out_of_range_is_rejected() {
    let err = "1e5000".parse::<PluralOperands>().unwrap_err();
    assert!(matches!(
        err,
        OperandsError::ExponentOutOfRange { exponent: 5000, .. }
    ));
}

// =========================================================================
// Fixed fraction digits
// =========================================================================

#[test]
fn fraction_digits_pad_integers() {
    let o = PluralOperands::from(1u32).with_fraction_digits(1);
    assert_eq!(o.v(), 1);
    assert_eq!(o.f(), 0);
    assert_eq!(o.w(), 0);
    assert_eq!(o.i(), 1);
}

#[test]
fn fraction_digits_pad_existing_fraction() {
    let o = operands("1.5").with_fraction_digits(3);
    assert_eq!(o.v(), 3);
    assert_eq!(o.f(), 500);
    assert_eq!(o.t(), 5);
}

#[test]
fn fraction_digits_agree_with_written_zeros_past_fold_width() {
    for digits in [17, 18, 19, 20, 25] {
        let zeros = "0".repeat(digits);
        let padded = PluralOperands::from(1u32).with_fraction_digits(digits);
        assert_eq!(padded, operands(&format!("1.{zeros}")), "1 with {digits} digits");
        assert_eq!(padded.f(), 0);

        let padded = operands("0.05").with_fraction_digits(digits);
        let written = format!("0.05{}", &zeros[2..]);
        assert_eq!(padded, operands(&written), "0.05 with {digits} digits");
    }
}

#[test]
fn padded_zero_fraction_still_matches_zero() {
    let rules = PluralRules::compile(&RuleSet::new(vec![(
        PluralCategory::One,
        "f = 0".to_string(),
    )]));
    let padded = PluralOperands::from(1u32).with_fraction_digits(20);
    assert_eq!(rules.category_for(padded), PluralCategory::One);
}

#[test]
fn fraction_digits_never_shrink() {
    let o = operands("1.250").with_fraction_digits(1);
    assert_eq!(o.v(), 3);
    assert_eq!(o.f(), 250);
}

// =========================================================================
// Conversions
// =========================================================================

#[test]
fn from_integer_types() {
    assert_eq!(PluralOperands::from(5u8).i(), 5);
    assert_eq!(PluralOperands::from(5usize).i(), 5);
    assert_eq!(PluralOperands::from(5i64), PluralOperands::from(5u64));
}

#[test]
fn negative_integers_use_absolute_value() {
    assert_eq!(PluralOperands::from(-21i32), PluralOperands::from(21u32));
    assert_eq!(PluralOperands::from(i64::MIN).n(), 9_223_372_036_854_775_808.0);
}

#[test]
fn from_float_uses_shortest_representation() {
    let o = PluralOperands::try_from(1.5f64).unwrap();
    assert_eq!((o.i(), o.v(), o.f()), (1, 1, 5));

    let whole = PluralOperands::try_from(2.0f64).unwrap();
    assert_eq!(whole.v(), 0);
    assert_eq!(whole, PluralOperands::from(2u32));
}

#[test]
fn from_float_rejects_non_finite() {
    assert!(matches!(
        PluralOperands::try_from(f64::NAN),
        Err(OperandsError::NonFinite { .. })
    ));
    assert!(PluralOperands::try_from(f64::INFINITY).is_err());
    assert!(PluralOperands::try_from(f32::NEG_INFINITY).is_err());
}

#[test]
fn tiny_float_has_long_fraction() {
    let o = PluralOperands::try_from(1e-7f64).unwrap();
    assert_eq!(o.i(), 0);
    assert_eq!(o.v(), 7);
    assert_eq!(o.f(), 1);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(operands("  42 "), operands("42"));
}

#[test]
fn malformed_numerals_are_rejected() {
    for input in ["", "abc", "1.", ".5", "1..2", "1,5", "1c", "--1", "1.5x"] {
        assert!(
            matches!(
                input.parse::<PluralOperands>(),
                Err(OperandsError::Malformed { .. })
            ),
            "expected '{input}' to be malformed"
        );
    }
}

// =========================================================================
// Modulus and folding
// =========================================================================

#[test]
fn reduced_applies_modulus_per_operand() {
    let o = operands("121.5");
    assert_eq!(o.reduced(Operand::I, Some(100)), Some(21.0));
    assert_eq!(o.reduced(Operand::N, Some(100)), Some(21.5));
    assert_eq!(o.reduced(Operand::I, None), Some(121.0));
    assert_eq!(o.reduced(Operand::I, Some(0)), None);
}

#[test]
fn reduced_n_stays_exact_past_float_precision() {
    let o = PluralOperands::from(10_000_000_000_000_000_001u64);
    assert_eq!(o.reduced(Operand::N, Some(10)), Some(1.0));
    assert_eq!(o.reduced(Operand::N, Some(100)), Some(1.0));
    assert_eq!(operands("10000000000000000001").reduced(Operand::N, Some(10)), Some(1.0));

    let o = operands("12345678901234567.5");
    assert_eq!(o.reduced(Operand::N, Some(10)), Some(7.5));
}

#[test]
fn lithuanian_one_holds_for_huge_integers() {
    let rules = PluralRules::compile(&RuleSet::new(vec![(
        PluralCategory::One,
        "n % 10 = 1 and n % 100 != 11..19".to_string(),
    )]));
    let o = PluralOperands::from(10_000_000_000_000_000_001u64);
    assert_eq!(rules.category_for(o), PluralCategory::One);
    assert_eq!(
        rules.category_for(operands("10000000000000000011")),
        PluralCategory::Other
    );
}

#[test]
fn huge_integers_fold_without_losing_low_digits() {
    let o = operands("1234567890123456789012");
    assert_eq!(o.reduced(Operand::I, Some(100)), Some(12.0));
    assert_eq!(o.reduced(Operand::I, Some(1_000_000)), Some(789_012.0));
    assert_ne!(o.i(), 12);
}

#[test]
fn folded_value_never_equals_small_literal() {
    let o = operands("100000000000000000001");
    assert_ne!(o.i(), 1);
    assert_eq!(o.reduced(Operand::I, Some(10)), Some(1.0));
}
