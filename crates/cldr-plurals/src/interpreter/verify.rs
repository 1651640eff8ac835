//! Verification of rule sets against their own sample lists.
//!
//! Every value listed in a rule's `@integer` / `@decimal` sections must
//! classify to that rule's category. A mismatch means either the rule data
//! or the engine is wrong.

use serde::Serialize;

use crate::interpreter::rules::PluralRules;
use crate::interpreter::table::RuleSet;
use crate::parser::{Sample, expand_samples, parse_rule_quiet};
use crate::types::PluralCategory;

/// A sample that did not classify to the category that lists it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleMismatch {
    pub expected: PluralCategory,
    /// `None` when the sample itself could not be read as a number.
    pub actual: Option<PluralCategory>,
    pub sample: Sample,
}

/// Check every sample of every rule in `rules`.
///
/// Returns an empty vector when the rule set is self-consistent.
///
/// ```
/// use cldr_plurals::{PluralCategory, RuleSet, verify_rule_set};
///
/// let rules = RuleSet::from_iter([
///     (PluralCategory::One, "i = 1 and v = 0 @integer 1"),
///     (PluralCategory::Other, " @integer 0, 2~16 @decimal 0.0~1.5"),
/// ]);
/// assert!(verify_rule_set(&rules).is_empty());
///
/// let broken = RuleSet::from_iter([
///     (PluralCategory::One, "i = 1 @integer 1, 2"),
///     (PluralCategory::Other, ""),
/// ]);
/// let mismatches = verify_rule_set(&broken);
/// assert_eq!(mismatches.len(), 1);
/// assert_eq!(mismatches[0].actual, Some(PluralCategory::Other));
/// ```
pub fn verify_rule_set(rules: &RuleSet) -> Vec<SampleMismatch> {
    let compiled = PluralRules::compile(rules);
    let mut mismatches = Vec::new();
    for (expected, text) in rules.iter() {
        let rule = parse_rule_quiet(text);
        let sections = [rule.integer_samples, rule.decimal_samples];
        for sample in sections
            .iter()
            .flatten()
            .flat_map(|section| expand_samples(section, None))
        {
            let actual = sample
                .operands()
                .ok()
                .map(|operands| compiled.category_for(operands));
            if actual != Some(expected) {
                mismatches.push(SampleMismatch {
                    expected,
                    actual,
                    sample,
                });
            }
        }
    }
    mismatches
}
