//! Public AST types for CLDR plural rules.
//!
//! A rule is a tagged tree: a [`Predicate`] is an OR of [`AndGroup`]s, each
//! an AND of [`Condition`]s. The tree is public so tooling can inspect,
//! render or serialize why a number matched.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::types::Operand;

/// A parsed plural rule: its predicate plus the raw sample sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub predicate: Predicate,
    /// Raw text following `@integer`, if present.
    pub integer_samples: Option<String>,
    /// Raw text following `@decimal`, if present.
    pub decimal_samples: Option<String>,
}

/// The condition part of a rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Predicate {
    /// Empty condition: always true. The normal shape of `other`.
    Always,
    /// True if any group matches.
    AnyOf(Vec<AndGroup>),
}

/// Conditions joined by `and`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AndGroup {
    pub conditions: Vec<Condition>,
}

/// One clause of a rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Condition {
    /// A well-formed `operand [% modulus] (=|!=) values` clause.
    Relation(Relation),
    /// A clause that failed to parse. Never matches.
    Invalid { clause: String, message: String },
}

/// A relation between an operand and a list of values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relation {
    /// Operand symbol as written. Symbols outside TR35 are kept so the
    /// relation can be rendered, but they never match.
    pub symbol: char,
    pub modulus: Option<u64>,
    pub operator: Operator,
    pub values: Vec<RangeItem>,
}

impl Relation {
    /// The operand this relation reads, if its symbol is a TR35 operand.
    pub fn operand(&self) -> Option<Operand> {
        Operand::from_symbol(self.symbol)
    }
}

/// Comparison operator of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    Equals,
    NotEquals,
}

/// An element of a relation's value list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RangeItem {
    /// A single integer.
    Value(u64),
    /// An inclusive integer range `start..end`.
    Range { start: u64, end: u64 },
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Predicate::AnyOf(_) = self.predicate {
            parts.push(self.predicate.to_string());
        }
        if let Some(samples) = &self.integer_samples {
            parts.push(format!("@integer {samples}"));
        }
        if let Some(samples) = &self.decimal_samples {
            parts.push(format!("@decimal {samples}"));
        }
        write!(f, "{}", parts.join(" "))
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Always => Ok(()),
            Predicate::AnyOf(groups) => {
                for (index, group) in groups.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" or ")?;
                    }
                    write!(f, "{group}")?;
                }
                Ok(())
            }
        }
    }
}

impl Display for AndGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, condition) in self.conditions.iter().enumerate() {
            if index > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Relation(relation) => write!(f, "{relation}"),
            Condition::Invalid { clause, .. } => f.write_str(clause),
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)?;
        if let Some(modulus) = self.modulus {
            write!(f, " % {modulus}")?;
        }
        write!(f, " {} ", self.operator)?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Equals => f.write_str("="),
            Operator::NotEquals => f.write_str("!="),
        }
    }
}

impl Display for RangeItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RangeItem::Value(value) => write!(f, "{value}"),
            RangeItem::Range { start, end } => write!(f, "{start}..{end}"),
        }
    }
}
