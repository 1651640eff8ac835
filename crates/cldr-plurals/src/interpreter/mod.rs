//! Plural rule interpreter.
//!
//! This module compiles rule sets into category determiners, evaluates them
//! against plural operands, and manages the rule table those sets come from:
//! loading, fallback lookup, caching, and reload.

mod cache;
mod error;
mod evaluator;
mod explain;
mod rules;
mod store;
mod table;
mod verify;

pub use cache::PredicateCache;
pub use error::{LoadError, LoadWarning};
pub use explain::{ConditionTrace, Explanation, GroupTrace, RuleTrace};
pub use rules::{CompiledRule, PluralRules, compile};
pub use store::PluralRuleStore;
pub use table::{RuleSet, RuleTable, fallback_chain};
pub use verify::{SampleMismatch, verify_rule_set};
