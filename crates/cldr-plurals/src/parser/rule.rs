//! Rule text parser.
//!
//! Splits a raw CLDR rule into its condition and its `@integer` / `@decimal`
//! sample sections, then splits the condition on `" or "` and each OR-group
//! on `" and "`, so `and` binds tighter than `or`. Unparseable clauses become
//! [`Condition::Invalid`] and fail their group closed.

use tracing::warn;

use super::ast::{AndGroup, Condition, Predicate, Rule};
use super::condition::parse_condition;

const OR_SEPARATOR: &str = " or ";
const AND_SEPARATOR: &str = " and ";

/// Parse a complete rule string, including sample sections.
///
/// Never fails: a malformed clause is kept as a never-matching condition and
/// logged.
///
/// # Examples
///
/// ```
/// use cldr_plurals::parser::{Predicate, parse_rule};
///
/// let rule = parse_rule("i = 1 and v = 0 @integer 1");
/// assert_eq!(rule.predicate.to_string(), "i = 1 and v = 0");
/// assert_eq!(rule.integer_samples.as_deref(), Some("1"));
///
/// let other = parse_rule(" @integer 0, 2~16, …");
/// assert_eq!(other.predicate, Predicate::Always);
/// ```
pub fn parse_rule(text: &str) -> Rule {
    parse_rule_logged(text, true)
}

/// [`parse_rule`] without logging, for callers that report problems
/// themselves.
pub(crate) fn parse_rule_quiet(text: &str) -> Rule {
    parse_rule_logged(text, false)
}

fn parse_rule_logged(text: &str, log: bool) -> Rule {
    let (condition, samples) = match text.find('@') {
        Some(index) => text.split_at(index),
        None => (text, ""),
    };

    let mut integer_samples = None;
    let mut decimal_samples = None;
    for section in samples.split('@').map(str::trim).filter(|s| !s.is_empty()) {
        if let Some(list) = section.strip_prefix("integer") {
            integer_samples = Some(list.trim().to_string());
        } else if let Some(list) = section.strip_prefix("decimal") {
            decimal_samples = Some(list.trim().to_string());
        } else if log {
            warn!(section, "ignoring unknown plural sample section");
        }
    }

    Rule {
        predicate: predicate_logged(condition, log),
        integer_samples,
        decimal_samples,
    }
}

/// Parse the condition part of a rule (no sample sections).
///
/// An empty condition is [`Predicate::Always`].
pub fn parse_predicate(condition: &str) -> Predicate {
    predicate_logged(condition, true)
}

fn predicate_logged(condition: &str, log: bool) -> Predicate {
    let condition = condition.trim();
    if condition.is_empty() {
        return Predicate::Always;
    }
    let groups = condition
        .split(OR_SEPARATOR)
        .map(|group| AndGroup {
            conditions: group
                .split(AND_SEPARATOR)
                .map(|clause| parse_clause(clause, log))
                .collect(),
        })
        .collect();
    Predicate::AnyOf(groups)
}

fn parse_clause(clause: &str, log: bool) -> Condition {
    match parse_condition(clause) {
        Ok(relation) => {
            if log && relation.operand().is_none() {
                warn!(
                    clause = clause.trim(),
                    symbol = %relation.symbol,
                    "plural condition references an unknown operand and will never match"
                );
            }
            Condition::Relation(relation)
        }
        Err(error) => {
            if log {
                warn!(
                    clause = clause.trim(),
                    %error,
                    "unparseable plural condition will never match"
                );
            }
            Condition::Invalid {
                clause: clause.trim().to_string(),
                message: error.to_string(),
            }
        }
    }
}
