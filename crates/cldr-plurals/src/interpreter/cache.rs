//! Content-keyed cache of parsed rules.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::parser::{Rule, parse_rule};

/// Parsed rules keyed by their exact source text.
///
/// Many languages share identical rule strings (`i = 1 and v = 0` alone
/// covers dozens), so a shared cache parses each distinct string once.
/// Entries are immutable once inserted; the cache is only ever cleared as a
/// whole, when the dataset it was built from is replaced.
#[derive(Debug, Default)]
pub struct PredicateCache {
    entries: RwLock<HashMap<String, Arc<Rule>>>,
}

impl PredicateCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the parsed form of `text`, parsing it on first use.
    pub fn get_or_parse(&self, text: &str) -> Arc<Rule> {
        if let Some(rule) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(text)
        {
            return Arc::clone(rule);
        }
        let parsed = Arc::new(parse_rule(text));
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(entries.entry(text.to_string()).or_insert(parsed))
    }

    /// Number of distinct rule strings parsed so far.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been parsed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
