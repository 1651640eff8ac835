//! Implementation of the `cldr-plurals check` command.

use cldr_plurals::{verify_rule_set, LoadWarning, SampleMismatch};
use miette::{IntoDiagnostic, Report};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::{rule_set_for, RuleSource};
use crate::output::RuleDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Languages to check (repeatable). Defaults to every language.
    #[arg(long)]
    pub lang: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a sample mismatch.
#[derive(Serialize)]
struct MismatchJson<'a> {
    language: &'a str,
    #[serde(flatten)]
    mismatch: &'a SampleMismatch,
}

/// JSON output for the whole check.
#[derive(Serialize)]
struct CheckReport<'a> {
    languages: usize,
    warnings: Vec<&'a LoadWarning>,
    mismatches: Vec<MismatchJson<'a>>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs, source: &RuleSource) -> miette::Result<i32> {
    let store = match source.load() {
        Ok(store) => store,
        Err(e) => return Ok(e.report()),
    };
    let table = store.table();

    let mut languages: Vec<&str> = Vec::new();
    if args.lang.is_empty() {
        languages.extend(table.languages());
    } else {
        for language in &args.lang {
            let key = match rule_set_for(&store, language) {
                Ok((key, _)) => key,
                Err(e) => return Ok(e.report()),
            };
            if !languages.contains(&key) {
                languages.push(key);
            }
        }
    }

    let all_warnings = table.validate();
    let warnings: Vec<&LoadWarning> = all_warnings
        .iter()
        .filter(|warning| languages.contains(&warning.language()))
        .collect();

    let mut mismatches: Vec<(&str, SampleMismatch)> = Vec::new();
    for &language in &languages {
        if let Some(rules) = table.get(language) {
            mismatches.extend(
                verify_rule_set(rules)
                    .into_iter()
                    .map(|mismatch| (language, mismatch)),
            );
        }
    }

    if args.json {
        let report = CheckReport {
            languages: languages.len(),
            warnings: warnings.clone(),
            mismatches: mismatches
                .iter()
                .map(|(language, mismatch)| MismatchJson { language, mismatch })
                .collect(),
        };
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;
        println!("{json}");
    } else {
        for warning in &warnings {
            let rule_text = warning
                .category()
                .and_then(|category| table.get(warning.language())?.get(category));
            let diagnostic = RuleDiagnostic::from_warning(warning, rule_text);
            eprintln!("{:?}", Report::new(diagnostic));
        }
        for (language, mismatch) in &mismatches {
            let rule_text = table
                .get(language)
                .and_then(|rules| rules.get(mismatch.expected))
                .unwrap_or_default();
            let diagnostic = RuleDiagnostic::from_mismatch(language, mismatch, rule_text);
            eprintln!("{:?}", Report::new(diagnostic));
        }
        print_summary(languages.len(), warnings.len(), mismatches.len());
    }

    if warnings.is_empty() && mismatches.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}

fn print_summary(languages: usize, warnings: usize, mismatches: usize) {
    let summary = format!(
        "checked {languages} language(s): {warnings} warning(s), {mismatches} sample mismatch(es)"
    );
    if warnings == 0 && mismatches == 0 {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.red());
    }
}
