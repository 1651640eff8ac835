//! Implementation of the `cldr-plurals samples` command.

use cldr_plurals::{expand_samples, parse_rule, PluralCategory};

use super::{rule_set_for, RuleSource};
use crate::output::table::{format_samples_table, SampleRow};

/// Arguments for the samples command.
#[derive(Debug, clap::Args)]
pub struct SamplesArgs {
    /// Language identifier (e.g., en, ru, pt-PT)
    #[arg(long)]
    pub lang: String,
}

/// Run the samples command.
pub fn run_samples(args: SamplesArgs, source: &RuleSource) -> miette::Result<i32> {
    let store = match source.load() {
        Ok(store) => store,
        Err(e) => return Ok(e.report()),
    };
    let (key, rules) = match rule_set_for(&store, &args.lang) {
        Ok(found) => found,
        Err(e) => return Ok(e.report()),
    };

    let expand = |section: Option<String>| -> Vec<String> {
        section
            .map(|text| {
                expand_samples(&text, None)
                    .iter()
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default()
    };

    let mut rows: Vec<SampleRow> = rules
        .iter()
        .map(|(category, text)| {
            let rule = parse_rule(text);
            SampleRow {
                category,
                condition: rule.predicate.to_string(),
                integers: expand(rule.integer_samples),
                decimals: expand(rule.decimal_samples),
            }
        })
        .collect();
    if rules.get(PluralCategory::Other).is_none() {
        rows.push(SampleRow {
            category: PluralCategory::Other,
            condition: String::new(),
            integers: Vec::new(),
            decimals: Vec::new(),
        });
    }

    println!("{key} ({})", store.rule_type());
    println!("{}", format_samples_table(&rows));
    Ok(exitcode::OK)
}
