//! Explanations of why a number landed in a category.
//!
//! A trace records, for every rule in evaluation order, the value each
//! condition saw and whether it matched. Traces serialize to JSON for
//! tooling.

use serde::Serialize;

use crate::parser::ast::{AndGroup, Condition, Predicate};
use crate::types::{PluralCategory, PluralOperands};

/// Full trace of one classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    /// The category that was selected.
    pub category: PluralCategory,
    pub operands: PluralOperands,
    /// One entry per declared rule, in evaluation order.
    pub rules: Vec<RuleTrace>,
}

/// Trace of one rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleTrace {
    pub category: PluralCategory,
    /// Canonical text of the rule's condition.
    pub condition: String,
    pub matched: bool,
    pub groups: Vec<GroupTrace>,
}

/// Trace of one AND-group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTrace {
    pub matched: bool,
    pub conditions: Vec<ConditionTrace>,
}

/// Trace of one condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionTrace {
    pub clause: String,
    /// Operand value after any modulus; `None` when indeterminate.
    pub value: Option<f64>,
    pub matched: bool,
}

impl Predicate {
    /// Trace every group of the predicate. `Always` has no groups.
    pub fn trace(&self, operands: &PluralOperands) -> Vec<GroupTrace> {
        match self {
            Predicate::Always => Vec::new(),
            Predicate::AnyOf(groups) => groups.iter().map(|group| group.trace(operands)).collect(),
        }
    }
}

impl AndGroup {
    fn trace(&self, operands: &PluralOperands) -> GroupTrace {
        let conditions: Vec<ConditionTrace> = self
            .conditions
            .iter()
            .map(|condition| condition.trace(operands))
            .collect();
        GroupTrace {
            matched: conditions.iter().all(|condition| condition.matched),
            conditions,
        }
    }
}

impl Condition {
    fn trace(&self, operands: &PluralOperands) -> ConditionTrace {
        ConditionTrace {
            clause: self.to_string(),
            value: self.value(operands),
            matched: self.matches(operands),
        }
    }
}
