//! CLDR plural category resolution.
//!
//! [`PluralRules`] holds one language's compiled rules in declaration order
//! and classifies numbers by first match. Different languages have different
//! rule sets - English has "one" and "other", Russian has "one", "few",
//! "many" and "other", and Arabic uses all six categories - but every
//! language falls back to "other" when nothing else matches.

use std::sync::Arc;

use tracing::trace;

use crate::interpreter::cache::PredicateCache;
use crate::interpreter::explain::{Explanation, RuleTrace};
use crate::interpreter::table::RuleSet;
use crate::parser::{Predicate, Rule, parse_rule};
use crate::types::{PluralCategory, PluralOperands};

/// A category together with its parsed rule.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledRule {
    pub category: PluralCategory,
    pub rule: Arc<Rule>,
}

impl CompiledRule {
    /// The rule's condition.
    pub fn predicate(&self) -> &Predicate {
        &self.rule.predicate
    }
}

/// Compiled plural rules for one language.
///
/// Immutable once built, so a single instance can be shared across threads
/// and queried concurrently.
///
/// # Examples
///
/// ```
/// use cldr_plurals::{PluralCategory, PluralRules, RuleSet};
///
/// let rules = RuleSet::new(vec![
///     (PluralCategory::One, "i = 1 and v = 0 @integer 1".to_string()),
///     (PluralCategory::Other, " @integer 0, 2~16".to_string()),
/// ]);
/// let english = PluralRules::compile(&rules);
///
/// assert_eq!(english.category_for(1u32), PluralCategory::One);
/// assert_eq!(english.category_for(2u32), PluralCategory::Other);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluralRules {
    rules: Vec<CompiledRule>,
}

impl PluralRules {
    /// Compile a rule set, parsing every rule afresh.
    pub fn compile(rules: &RuleSet) -> Self {
        Self::build(rules, |text| Arc::new(parse_rule(text)))
    }

    /// Compile a rule set, reusing parsed rules from `cache`.
    pub fn compile_with(rules: &RuleSet, cache: &PredicateCache) -> Self {
        Self::build(rules, |text| cache.get_or_parse(text))
    }

    fn build(rules: &RuleSet, mut parse: impl FnMut(&str) -> Arc<Rule>) -> Self {
        let rules: Vec<CompiledRule> = rules
            .iter()
            .filter(|(category, _)| *category != PluralCategory::Other)
            .map(|(category, text)| CompiledRule {
                category,
                rule: parse(text),
            })
            .collect();
        trace!(rules = rules.len(), "compiled plural rules");
        PluralRules { rules }
    }

    /// The compiled rules in evaluation order. `Other` is never listed.
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Every category this language distinguishes, `Other` last.
    pub fn categories(&self) -> Vec<PluralCategory> {
        let mut categories: Vec<PluralCategory> =
            self.rules.iter().map(|rule| rule.category).collect();
        categories.push(PluralCategory::Other);
        categories
    }

    /// Classify a number: the category of the first matching rule, or
    /// `Other` when none matches.
    pub fn category_for(&self, operands: impl Into<PluralOperands>) -> PluralCategory {
        let operands = operands.into();
        self.rules
            .iter()
            .find(|rule| rule.predicate().matches(&operands))
            .map_or(PluralCategory::Other, |rule| rule.category)
    }

    /// Classify a number and record how every rule evaluated.
    pub fn explain(&self, operands: impl Into<PluralOperands>) -> Explanation {
        let operands = operands.into();
        let rules = self
            .rules
            .iter()
            .map(|rule| RuleTrace {
                category: rule.category,
                condition: rule.predicate().to_string(),
                matched: rule.predicate().matches(&operands),
                groups: rule.predicate().trace(&operands),
            })
            .collect();
        Explanation {
            category: self.category_for(operands),
            operands,
            rules,
        }
    }
}

/// Compile a rule set into a category determiner.
pub fn compile(rules: &RuleSet) -> PluralRules {
    PluralRules::compile(rules)
}
