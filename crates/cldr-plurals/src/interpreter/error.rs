//! Error and warning types for loading plural rule tables.

use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::types::{PluralCategory, RuleType};

/// Errors that occur while loading a rule table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a rule file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rule file is not valid CLDR supplemental JSON.
    #[error("malformed plural rule JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed but has no section for the requested rule type.
    #[error("{origin} has no '{}' section", .rule_type.section_name())]
    MissingSection { origin: String, rule_type: RuleType },

    /// Attempted to reload a store whose table did not come from a file.
    #[error("cannot reload plural rules: table was not loaded from a file")]
    NoPathForReload,
}

/// A non-fatal problem found in a rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LoadWarning {
    /// A condition clause failed to parse and will never match.
    UnparseableCondition {
        language: String,
        category: PluralCategory,
        clause: String,
        message: String,
    },

    /// A relation reads an operand symbol TR35 does not define.
    UnknownOperand {
        language: String,
        category: PluralCategory,
        symbol: char,
    },

    /// A rule label that is not `pluralRule-count-<category>`.
    UnknownCategoryKey { language: String, key: String },
}

impl LoadWarning {
    /// The table key the warning is about.
    pub fn language(&self) -> &str {
        match self {
            LoadWarning::UnparseableCondition { language, .. }
            | LoadWarning::UnknownOperand { language, .. }
            | LoadWarning::UnknownCategoryKey { language, .. } => language,
        }
    }

    /// The category whose rule triggered the warning, if any.
    pub fn category(&self) -> Option<PluralCategory> {
        match self {
            LoadWarning::UnparseableCondition { category, .. }
            | LoadWarning::UnknownOperand { category, .. } => Some(*category),
            LoadWarning::UnknownCategoryKey { .. } => None,
        }
    }
}

impl Display for LoadWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::UnparseableCondition {
                language,
                category,
                clause,
                message,
            } => write!(
                f,
                "{language}/{category}: cannot parse '{clause}' ({message}); it never matches"
            ),
            LoadWarning::UnknownOperand {
                language,
                category,
                symbol,
            } => write!(
                f,
                "{language}/{category}: unknown operand '{symbol}'; conditions on it never match"
            ),
            LoadWarning::UnknownCategoryKey { language, key } => {
                write!(f, "{language}: ignoring unknown rule key '{key}'")
            }
        }
    }
}
