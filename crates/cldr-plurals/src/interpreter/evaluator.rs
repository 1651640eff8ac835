//! Evaluation of parsed rule trees against plural operands.
//!
//! Evaluation is pure and total: every node yields `true` or `false`.
//! Indeterminate operands (unknown symbols, zero moduli) and invalid clauses
//! evaluate to `false` regardless of the operator, so a broken clause can
//! only ever make its AND-group fail.

use crate::parser::ast::{AndGroup, Condition, Operator, Predicate, RangeItem, Relation};
use crate::types::PluralOperands;

impl Predicate {
    /// Whether the predicate holds for `operands`.
    pub fn matches(&self, operands: &PluralOperands) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::AnyOf(groups) => groups.iter().any(|group| group.matches(operands)),
        }
    }
}

impl AndGroup {
    /// Whether every condition in the group holds.
    pub fn matches(&self, operands: &PluralOperands) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.matches(operands))
    }
}

impl Condition {
    /// Whether the condition holds. Invalid conditions never hold.
    pub fn matches(&self, operands: &PluralOperands) -> bool {
        match self {
            Condition::Relation(relation) => relation.matches(operands),
            Condition::Invalid { .. } => false,
        }
    }

    /// The operand value the condition compares, after any modulus.
    pub fn value(&self, operands: &PluralOperands) -> Option<f64> {
        match self {
            Condition::Relation(relation) => relation.value(operands),
            Condition::Invalid { .. } => None,
        }
    }
}

impl Relation {
    /// The operand value after applying the modulus, or `None` when it is
    /// indeterminate.
    pub fn value(&self, operands: &PluralOperands) -> Option<f64> {
        operands.reduced(self.operand()?, self.modulus)
    }

    /// Whether the relation holds.
    pub fn matches(&self, operands: &PluralOperands) -> bool {
        let Some(value) = self.value(operands) else {
            return false;
        };
        let listed = self.values.iter().any(|item| item.contains(value));
        match self.operator {
            Operator::Equals => listed,
            Operator::NotEquals => !listed,
        }
    }
}

impl RangeItem {
    /// Whether `value` is this integer or lies in this range.
    ///
    /// Only integral values can match: `n % 100 = 3..10` is false for
    /// `n = 10.1`.
    pub fn contains(&self, value: f64) -> bool {
        if value.fract() != 0.0 {
            return false;
        }
        match *self {
            RangeItem::Value(expected) => value == expected as f64,
            RangeItem::Range { start, end } => start as f64 <= value && value <= end as f64,
        }
    }
}
