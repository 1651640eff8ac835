use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Which family of plural rules a table holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    /// Counting quantities: "1 day", "5 days".
    #[default]
    Cardinal,
    /// Ranking positions: "1st", "2nd", "3rd".
    Ordinal,
}

impl RuleType {
    /// Name of the section holding this rule type in CLDR supplemental JSON.
    pub fn section_name(self) -> &'static str {
        match self {
            RuleType::Cardinal => "plurals-type-cardinal",
            RuleType::Ordinal => "plurals-type-ordinal",
        }
    }
}

impl Display for RuleType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RuleType::Cardinal => f.write_str("cardinal"),
            RuleType::Ordinal => f.write_str("ordinal"),
        }
    }
}
