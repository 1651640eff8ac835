//! CLI command implementations.

mod check;
mod classify;
mod samples;

use std::path::PathBuf;
use std::sync::Arc;

use cldr_plurals::{LoadError, PluralRuleStore, PluralRules, RuleSet, RuleType};
use miette::{Diagnostic, Report};
use thiserror::Error;

pub use check::{run_check, CheckArgs};
pub use classify::{run_classify, ClassifyArgs};
pub use samples::{run_samples, SamplesArgs};

/// Where the rule table comes from, resolved from global flags.
#[derive(Debug)]
pub struct RuleSource {
    pub path: Option<PathBuf>,
    pub rule_type: RuleType,
}

/// Failures every command can hit before doing its own work.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("no plural rule file given")]
    #[diagnostic(
        code(cldr_plurals::no_rules),
        help("pass --rules <path> or set CLDR_PLURALS_RULES")
    )]
    NoRules,

    #[error("{0}")]
    #[diagnostic(code(cldr_plurals::load))]
    Load(#[from] LoadError),

    #[error("no {rule_type} plural rules for '{language}'")]
    #[diagnostic(code(cldr_plurals::unknown_language))]
    UnknownLanguage {
        language: String,
        rule_type: RuleType,
        #[help]
        help: Option<String>,
    },
}

impl CliError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NoRules => exitcode::USAGE,
            CliError::Load(LoadError::Io { .. }) => exitcode::NOINPUT,
            CliError::Load(_) | CliError::UnknownLanguage { .. } => exitcode::DATAERR,
        }
    }

    /// Print the error as a diagnostic and return its exit code.
    pub fn report(self) -> i32 {
        let code = self.exit_code();
        eprintln!("{:?}", Report::new(self));
        code
    }
}

impl RuleSource {
    /// Load the rule file into a store.
    pub fn load(&self) -> Result<PluralRuleStore, CliError> {
        let path = self.path.as_ref().ok_or(CliError::NoRules)?;
        Ok(PluralRuleStore::from_path(path, self.rule_type)?)
    }
}

/// Compiled rules for `language`, or an error suggesting close matches.
pub fn rules_for(store: &PluralRuleStore, language: &str) -> Result<Arc<PluralRules>, CliError> {
    store
        .rules_for(&[language])
        .ok_or_else(|| unknown_language(store, language))
}

/// The table key `language` resolves to and its raw rules.
pub fn rule_set_for<'a>(
    store: &'a PluralRuleStore,
    language: &str,
) -> Result<(&'a str, &'a RuleSet), CliError> {
    store
        .table()
        .lookup(&[language])
        .ok_or_else(|| unknown_language(store, language))
}

fn unknown_language(store: &PluralRuleStore, language: &str) -> CliError {
    let suggestions = store.table().suggest(language);
    let help = (!suggestions.is_empty()).then(|| format!("did you mean: {}?", suggestions.join(", ")));
    CliError::UnknownLanguage {
        language: language.to_string(),
        rule_type: store.rule_type(),
        help,
    }
}
