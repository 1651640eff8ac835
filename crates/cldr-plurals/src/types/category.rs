use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prefix CLDR puts in front of every category label in `plurals.json`.
const RULE_KEY_PREFIX: &str = "pluralRule-count-";

/// A CLDR plural category.
///
/// Variants are declared in CLDR order, so the derived `Ord` matches the
/// order in which rules are evaluated: zero, one, two, few, many, and finally
/// the implicit `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// All categories in evaluation order.
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    /// The lowercase CLDR name, e.g. `"few"`.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    /// Parse a rule-table label such as `pluralRule-count-few`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cldr_plurals::PluralCategory;
    ///
    /// assert_eq!(
    ///     PluralCategory::from_rule_key("pluralRule-count-many"),
    ///     Some(PluralCategory::Many)
    /// );
    /// assert_eq!(PluralCategory::from_rule_key("many"), None);
    /// ```
    pub fn from_rule_key(key: &str) -> Option<PluralCategory> {
        key.strip_prefix(RULE_KEY_PREFIX)
            .and_then(|name| name.parse().ok())
    }

    /// The rule-table label for this category.
    pub fn rule_key(self) -> String {
        format!("{RULE_KEY_PREFIX}{}", self.as_str())
    }
}

impl Display for PluralCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string names no plural category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plural category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for PluralCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluralCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
