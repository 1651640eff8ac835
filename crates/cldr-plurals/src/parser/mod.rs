//! CLDR plural rule parser.
//!
//! This module turns raw rule strings into the public rule tree and expands
//! their sample lists. Parsing is lenient at the rule level and strict at the
//! clause level: [`parse_rule`] never fails, [`parse_condition`] reports
//! exactly why a clause is malformed.

pub mod ast;
mod condition;
pub mod error;
mod rule;
mod samples;

pub use ast::*;
pub use condition::parse_condition;
pub use error::ParseError;
pub use rule::{parse_predicate, parse_rule};
pub(crate) use rule::parse_rule_quiet;
pub use samples::{MAX_RANGE_SAMPLES, Sample, expand_samples};
