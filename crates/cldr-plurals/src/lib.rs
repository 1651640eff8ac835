//! CLDR plural rules.
//!
//! Parses the Unicode TR35 plural rule grammar and classifies numbers -
//! integers, decimals, and compact or exponential numerals - into the
//! plural categories `zero`, `one`, `two`, `few`, `many` and `other`.
//!
//! ```
//! use cldr_plurals::{PluralCategory, PluralOperands, RuleSet, compile};
//!
//! let russian = compile(&RuleSet::from_iter([
//!     (PluralCategory::One, "v = 0 and i % 10 = 1 and i % 100 != 11"),
//!     (PluralCategory::Few, "v = 0 and i % 10 = 2..4 and i % 100 != 12..14"),
//!     (
//!         PluralCategory::Many,
//!         "v = 0 and i % 10 = 0 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 11..14",
//!     ),
//!     (PluralCategory::Other, ""),
//! ]));
//!
//! assert_eq!(russian.category_for(21u32), PluralCategory::One);
//! assert_eq!(russian.category_for(22u32), PluralCategory::Few);
//! assert_eq!(russian.category_for(11u32), PluralCategory::Many);
//!
//! let one_and_a_half: PluralOperands = "1.5".parse().unwrap();
//! assert_eq!(russian.category_for(one_and_a_half), PluralCategory::Other);
//! ```

pub mod interpreter;
pub mod parser;
pub mod types;

pub use interpreter::{
    Explanation, LoadError, LoadWarning, PluralRuleStore, PluralRules, RuleSet, RuleTable,
    SampleMismatch, compile, fallback_chain, verify_rule_set,
};
pub use parser::{ParseError, Sample, expand_samples, parse_condition, parse_rule};
pub use types::{Operand, OperandsError, PluralCategory, PluralOperands, RuleType};
