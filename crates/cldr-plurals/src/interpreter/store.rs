//! Reloadable, caching front end over a rule table.
//!
//! The store owns the table, a content-keyed cache of parsed rules, and the
//! compiled [`PluralRules`] for every language asked for so far. Replacing
//! or reloading the table is the only event that invalidates those caches.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use bon::Builder;
use tracing::{debug, trace};

use crate::interpreter::cache::PredicateCache;
use crate::interpreter::error::LoadError;
use crate::interpreter::rules::PluralRules;
use crate::interpreter::table::RuleTable;
use crate::types::{PluralCategory, PluralOperands, RuleType};

/// Plural rules for many languages, compiled on demand.
///
/// Lookups take `&self` and are safe to share between threads; the caches
/// are read-mostly and entries never change once inserted.
///
/// # Example
///
/// ```
/// use cldr_plurals::{PluralCategory, PluralRuleStore, RuleSet, RuleTable, RuleType};
///
/// let mut table = RuleTable::new(RuleType::Cardinal);
/// table.insert("en", RuleSet::from_iter([
///     (PluralCategory::One, "i = 1 and v = 0 @integer 1"),
///     (PluralCategory::Other, " @integer 0, 2~16"),
/// ]));
///
/// let store = PluralRuleStore::builder().table(table).build();
/// assert_eq!(store.category_for(&["en-US"], 1u32), Some(PluralCategory::One));
/// assert_eq!(store.category_for(&["xx"], 1u32), None);
/// ```
#[derive(Debug, Builder)]
pub struct PluralRuleStore {
    /// Rule table to serve; empty cardinal table by default.
    #[builder(default)]
    table: RuleTable,

    /// File the table was read from, enabling [`PluralRuleStore::reload`].
    #[builder(into)]
    source_path: Option<PathBuf>,

    /// Parsed rules shared by every language, keyed by rule text.
    #[builder(skip)]
    predicates: PredicateCache,

    /// Compiled rules keyed by the table key they were resolved to.
    #[builder(skip)]
    compiled: RwLock<HashMap<String, Arc<PluralRules>>>,
}

impl Default for PluralRuleStore {
    fn default() -> Self {
        PluralRuleStore::builder().build()
    }
}

impl PluralRuleStore {
    /// Create a store with an empty cardinal table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a CLDR supplemental JSON file.
    ///
    /// The path is remembered for [`PluralRuleStore::reload`].
    pub fn from_path(path: impl AsRef<Path>, rule_type: RuleType) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let table = RuleTable::from_path(path, rule_type)?;
        Ok(PluralRuleStore::builder()
            .table(table)
            .source_path(path)
            .build())
    }

    /// The table being served.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Rule type of the table being served.
    pub fn rule_type(&self) -> RuleType {
        self.table.rule_type()
    }

    /// Compiled rules for the first candidate key the table knows.
    ///
    /// `None` means no plural rules are available for this language.
    pub fn rules_for(&self, candidates: &[&str]) -> Option<Arc<PluralRules>> {
        let (key, rule_set) = self.table.lookup(candidates)?;
        if let Some(rules) = self
            .compiled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            return Some(Arc::clone(rules));
        }
        trace!(language = key, "compiling plural rules");
        let rules = Arc::new(PluralRules::compile_with(rule_set, &self.predicates));
        let mut compiled = self.compiled.write().unwrap_or_else(PoisonError::into_inner);
        Some(Arc::clone(compiled.entry(key.to_string()).or_insert(rules)))
    }

    /// Classify a number for the first candidate key the table knows.
    pub fn category_for(
        &self,
        candidates: &[&str],
        operands: impl Into<PluralOperands>,
    ) -> Option<PluralCategory> {
        self.rules_for(candidates)
            .map(|rules| rules.category_for(operands))
    }

    /// Number of distinct rule strings parsed since the last reload.
    pub fn cached_rule_count(&self) -> usize {
        self.predicates.len()
    }

    /// Serve a different table. Clears every cache.
    ///
    /// The store forgets its source path, so a later `reload` fails until
    /// the store is rebuilt from a file.
    pub fn replace_table(&mut self, table: RuleTable) {
        self.table = table;
        self.source_path = None;
        self.invalidate();
    }

    /// Re-read the table from the file it was loaded from. Clears every
    /// cache and returns the number of languages loaded.
    pub fn reload(&mut self) -> Result<usize, LoadError> {
        let path = self.source_path.clone().ok_or(LoadError::NoPathForReload)?;
        self.table = RuleTable::from_path(&path, self.table.rule_type())?;
        self.invalidate();
        Ok(self.table.len())
    }

    fn invalidate(&self) {
        self.predicates.clear();
        self.compiled
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        debug!("plural rule caches cleared");
    }
}
