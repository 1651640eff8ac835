//! Rule tables: language identifier to ordered rule strings.
//!
//! The table is the consumed side of the engine. It is loaded once from CLDR
//! supplemental JSON (`plurals.json` or `ordinals.json`), is read-only
//! afterwards, and is looked up through an explicit, ordered chain of
//! candidate keys.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strsim::levenshtein;
use tracing::debug;

use crate::interpreter::error::{LoadError, LoadWarning};
use crate::parser::{Condition, Predicate, parse_rule_quiet};
use crate::types::{PluralCategory, RuleType};

/// One language's rules as `(category, raw rule text)` pairs in declaration
/// order. Order is precedence: the first matching rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    rules: Vec<(PluralCategory, String)>,
}

impl RuleSet {
    /// Create a rule set from pairs in declaration order.
    pub fn new(rules: Vec<(PluralCategory, String)>) -> Self {
        RuleSet { rules }
    }

    /// Iterate over `(category, rule text)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (PluralCategory, &str)> {
        self.rules
            .iter()
            .map(|(category, text)| (*category, text.as_str()))
    }

    /// The rule text declared for `category`.
    pub fn get(&self, category: PluralCategory) -> Option<&str> {
        self.iter()
            .find(|(declared, _)| *declared == category)
            .map(|(_, text)| text)
    }

    /// Number of declared rules, including `other` if it is declared.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Parse warnings for this rule set, attributed to `language`.
    pub fn validate(&self, language: &str) -> Vec<LoadWarning> {
        let mut warnings = Vec::new();
        for (category, text) in self.iter() {
            let Predicate::AnyOf(groups) = parse_rule_quiet(text).predicate else {
                continue;
            };
            for condition in groups.iter().flat_map(|group| &group.conditions) {
                match condition {
                    Condition::Invalid { clause, message } => {
                        warnings.push(LoadWarning::UnparseableCondition {
                            language: language.to_string(),
                            category,
                            clause: clause.clone(),
                            message: message.clone(),
                        });
                    }
                    Condition::Relation(relation) if relation.operand().is_none() => {
                        warnings.push(LoadWarning::UnknownOperand {
                            language: language.to_string(),
                            category,
                            symbol: relation.symbol,
                        });
                    }
                    Condition::Relation(_) => {}
                }
            }
        }
        warnings
    }
}

impl<S: Into<String>> FromIterator<(PluralCategory, S)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (PluralCategory, S)>>(iter: I) -> Self {
        RuleSet::new(
            iter.into_iter()
                .map(|(category, text)| (category, text.into()))
                .collect(),
        )
    }
}

/// Rule sets for every language of one rule type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rule_type: RuleType,
    languages: BTreeMap<String, RuleSet>,
    warnings: Vec<LoadWarning>,
}

/// Top level of a CLDR supplemental plurals file.
#[derive(Deserialize)]
struct CldrFile {
    supplemental: Supplemental,
}

type LanguageRules = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Deserialize)]
struct Supplemental {
    #[serde(rename = "plurals-type-cardinal")]
    cardinal: Option<LanguageRules>,
    #[serde(rename = "plurals-type-ordinal")]
    ordinal: Option<LanguageRules>,
}

impl RuleTable {
    /// Create an empty table.
    pub fn new(rule_type: RuleType) -> Self {
        RuleTable {
            rule_type,
            ..RuleTable::default()
        }
    }

    /// Parse CLDR supplemental JSON from a string.
    ///
    /// # Example
    ///
    /// ```
    /// use cldr_plurals::{PluralCategory, RuleTable, RuleType};
    ///
    /// let table = RuleTable::from_cldr_json(r#"{
    ///     "supplemental": {
    ///         "plurals-type-cardinal": {
    ///             "en": {
    ///                 "pluralRule-count-one": "i = 1 and v = 0 @integer 1",
    ///                 "pluralRule-count-other": " @integer 0, 2~16"
    ///             }
    ///         }
    ///     }
    /// }"#, RuleType::Cardinal).unwrap();
    ///
    /// let english = table.get("en").unwrap();
    /// assert_eq!(english.get(PluralCategory::One), Some("i = 1 and v = 0 @integer 1"));
    /// ```
    pub fn from_cldr_json(json: &str, rule_type: RuleType) -> Result<Self, LoadError> {
        Self::parse(json, rule_type, "<string>")
    }

    /// Read and parse a CLDR supplemental JSON file.
    pub fn from_path(path: impl AsRef<Path>, rule_type: RuleType) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, rule_type, &path.display().to_string())
    }

    fn parse(json: &str, rule_type: RuleType, origin: &str) -> Result<Self, LoadError> {
        let file: CldrFile = serde_json::from_str(json).map_err(|e| LoadError::Json {
            origin: origin.to_string(),
            source: e,
        })?;
        let section = match rule_type {
            RuleType::Cardinal => file.supplemental.cardinal,
            RuleType::Ordinal => file.supplemental.ordinal,
        }
        .ok_or_else(|| LoadError::MissingSection {
            origin: origin.to_string(),
            rule_type,
        })?;

        let mut table = RuleTable::new(rule_type);
        for (language, labels) in section {
            let mut rules = Vec::with_capacity(labels.len());
            for (key, text) in labels {
                match PluralCategory::from_rule_key(&key) {
                    Some(category) => rules.push((category, text)),
                    None => table.warnings.push(LoadWarning::UnknownCategoryKey {
                        language: language.clone(),
                        key,
                    }),
                }
            }
            // JSON objects carry no order; CLDR declares categories in
            // enum order, so restore it.
            rules.sort_by_key(|(category, _)| *category);
            table.languages.insert(language, RuleSet::new(rules));
        }
        debug!(
            origin,
            %rule_type,
            languages = table.languages.len(),
            "loaded plural rule table"
        );
        Ok(table)
    }

    /// The rule type of every set in this table.
    pub fn rule_type(&self) -> RuleType {
        self.rule_type
    }

    /// Add or replace the rules for one language key.
    pub fn insert(&mut self, language: impl Into<String>, rules: RuleSet) {
        self.languages.insert(language.into(), rules);
    }

    /// Rules stored under exactly `language`.
    pub fn get(&self, language: &str) -> Option<&RuleSet> {
        self.languages.get(language)
    }

    /// Find rules by trying each key of [`fallback_chain`] in order.
    ///
    /// Returns the key that matched alongside its rules. `None` means the
    /// table has no plural rules for this language, which callers should
    /// treat as "plural distinctions unknown".
    ///
    /// ```
    /// use cldr_plurals::{PluralCategory, RuleSet, RuleTable, RuleType};
    ///
    /// let mut table = RuleTable::new(RuleType::Cardinal);
    /// table.insert("pt", RuleSet::from_iter([(PluralCategory::One, "i = 0..1")]));
    /// table.insert("pt-PT", RuleSet::from_iter([(PluralCategory::One, "i = 1 and v = 0")]));
    ///
    /// assert_eq!(table.lookup(&["pt_PT"]).map(|(key, _)| key), Some("pt-PT"));
    /// assert_eq!(table.lookup(&["pt-BR"]).map(|(key, _)| key), Some("pt"));
    /// assert_eq!(table.lookup(&["tlh", "qaa"]), None);
    /// ```
    pub fn lookup(&self, candidates: &[&str]) -> Option<(&str, &RuleSet)> {
        fallback_chain(candidates).iter().find_map(|key| {
            self.languages
                .get_key_value(key)
                .map(|(key, rules)| (key.as_str(), rules))
        })
    }

    /// Language keys in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Number of languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether the table has no languages.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Up to three language keys within a small edit distance of
    /// `identifier`, closest first.
    pub fn suggest(&self, identifier: &str) -> Vec<String> {
        let max_distance = if identifier.len() <= 3 { 1 } else { 2 };
        let mut suggestions: Vec<(usize, &str)> = self
            .languages()
            .filter_map(|candidate| {
                let distance = levenshtein(identifier, candidate);
                (distance > 0 && distance <= max_distance).then_some((distance, candidate))
            })
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);
        suggestions
            .into_iter()
            .take(3)
            .map(|(_, key)| key.to_string())
            .collect()
    }

    /// Load-time warnings plus parse warnings for every rule in the table.
    pub fn validate(&self) -> Vec<LoadWarning> {
        let mut warnings = self.warnings.clone();
        for (language, rules) in &self.languages {
            warnings.extend(rules.validate(language));
        }
        warnings
    }
}

/// Expand candidate identifiers into the exact keys a lookup tries.
///
/// Candidates are tried in the order given. Each contributes itself with `_`
/// normalized to `-`, then its successively truncated subtags. Duplicates
/// keep their first position.
///
/// ```
/// use cldr_plurals::fallback_chain;
///
/// assert_eq!(
///     fallback_chain(&["zh_Hant_TW", "yue"]),
///     ["zh-Hant-TW", "zh-Hant", "zh", "yue"]
/// );
/// ```
pub fn fallback_chain(candidates: &[&str]) -> Vec<String> {
    let mut chain: Vec<String> = Vec::new();
    for candidate in candidates {
        let normalized = candidate.trim().replace('_', "-");
        let mut subtags: Vec<&str> = normalized.split('-').filter(|s| !s.is_empty()).collect();
        while !subtags.is_empty() {
            let key = subtags.join("-");
            if !chain.contains(&key) {
                chain.push(key);
            }
            subtags.pop();
        }
    }
    chain
}
