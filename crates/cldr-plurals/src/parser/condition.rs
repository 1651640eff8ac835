//! Condition clause parser using winnow.
//!
//! Parses one relational clause of a plural rule:
//! `operand [% modulus] (=|!=) value-list`, where the value list is a
//! comma-separated mix of integers and inclusive `a..b` ranges. The legacy
//! `mod` spelling of `%` is accepted.

use super::ast::{Operator, RangeItem, Relation};
use super::error::ParseError;
use winnow::ascii::{digit1, space0};
use winnow::combinator::{alt, opt, preceded, separated, terminated};
use winnow::error::{StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::any;

/// Parse a single condition clause.
///
/// Surrounding whitespace is ignored. Operand symbols are not checked against
/// the TR35 set here; any single lowercase letter parses, and unknown
/// operands are left to evaluation, where they never match.
///
/// # Examples
///
/// ```
/// use cldr_plurals::parser::{Operator, RangeItem, parse_condition};
///
/// let relation = parse_condition("i % 10 = 2..4, 9").unwrap();
/// assert_eq!(relation.symbol, 'i');
/// assert_eq!(relation.modulus, Some(10));
/// assert_eq!(relation.operator, Operator::Equals);
/// assert_eq!(
///     relation.values,
///     vec![RangeItem::Range { start: 2, end: 4 }, RangeItem::Value(9)]
/// );
///
/// assert!(parse_condition("i is 1").is_err());
/// ```
pub fn parse_condition(input: &str) -> Result<Relation, ParseError> {
    let trimmed = input.trim();
    let leading = input.len() - input.trim_start().len();
    let parsed = relation.parse(trimmed).map_err(|e| {
        let context = e.inner().to_string();
        let message = if context.is_empty() {
            match trimmed[e.offset()..].chars().next() {
                Some(c) => format!("unexpected character '{c}'"),
                None => "unexpected end of clause".to_string(),
            }
        } else {
            context.replace('\n', "; ")
        };
        ParseError::Syntax {
            column: leading + e.offset() + 1,
            message,
        }
    })?;
    validate(parsed)
}

/// Reject relations that parse but can never be meaningful.
fn validate(relation: Relation) -> Result<Relation, ParseError> {
    if relation.modulus == Some(0) {
        return Err(ParseError::ZeroModulus);
    }
    for item in &relation.values {
        if let RangeItem::Range { start, end } = *item {
            if end < start {
                return Err(ParseError::EmptyRange { start, end });
            }
        }
    }
    Ok(relation)
}

/// Parse a full relation.
fn relation(input: &mut &str) -> ModalResult<Relation> {
    let symbol = terminated(operand_symbol, space0).parse_next(input)?;
    let modulus = opt(terminated(modulus, space0)).parse_next(input)?;
    let operator = terminated(operator, space0).parse_next(input)?;
    let values: Vec<RangeItem> = separated(1.., range_item, (space0, ',', space0))
        .context(StrContext::Label("value list"))
        .context(StrContext::Expected(StrContextValue::Description(
            "integers or ranges like 2..4",
        )))
        .parse_next(input)?;
    Ok(Relation {
        symbol,
        modulus,
        operator,
        values,
    })
}

/// Parse an operand symbol: a single lowercase ASCII letter.
fn operand_symbol(input: &mut &str) -> ModalResult<char> {
    any.verify(|c: &char| c.is_ascii_lowercase())
        .context(StrContext::Label("operand"))
        .context(StrContext::Expected(StrContextValue::Description(
            "one of n, i, v, w, f, t, c, e",
        )))
        .parse_next(input)
}

/// Parse `% m` or `mod m`.
fn modulus(input: &mut &str) -> ModalResult<u64> {
    preceded((alt(("%", "mod")), space0), number).parse_next(input)
}

/// Parse `=` or `!=`.
fn operator(input: &mut &str) -> ModalResult<Operator> {
    alt((
        "!=".value(Operator::NotEquals),
        "=".value(Operator::Equals),
    ))
    .context(StrContext::Label("operator"))
    .context(StrContext::Expected(StrContextValue::StringLiteral("=")))
    .context(StrContext::Expected(StrContextValue::StringLiteral("!=")))
    .parse_next(input)
}

/// Parse a value or an inclusive range.
fn range_item(input: &mut &str) -> ModalResult<RangeItem> {
    (number, opt(preceded("..", number)))
        .map(|(start, end)| match end {
            Some(end) => RangeItem::Range { start, end },
            None => RangeItem::Value(start),
        })
        .parse_next(input)
}

/// Parse an unsigned decimal integer.
fn number(input: &mut &str) -> ModalResult<u64> {
    digit1.try_map(str::parse::<u64>).parse_next(input)
}
