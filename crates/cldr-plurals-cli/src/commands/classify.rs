//! Implementation of the `cldr-plurals classify` command.

use cldr_plurals::{Explanation, PluralCategory, PluralOperands};
use miette::IntoDiagnostic;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::{rules_for, RuleSource};

/// Arguments for the classify command.
#[derive(Debug, clap::Args)]
pub struct ClassifyArgs {
    /// Language identifier (e.g., en, ru, pt-PT)
    #[arg(long)]
    pub lang: String,

    /// Format every number with at least this many fraction digits
    #[arg(long)]
    pub fraction_digits: Option<usize>,

    /// Show how every rule evaluated
    #[arg(long)]
    pub explain: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Numbers to classify (plain, decimal, or compact like 1.2c6)
    #[arg(required = true, allow_hyphen_values = true)]
    pub numbers: Vec<String>,
}

/// JSON output for one classified number.
#[derive(Serialize)]
struct Classification {
    number: String,
    category: PluralCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<Explanation>,
}

/// Run the classify command.
pub fn run_classify(args: ClassifyArgs, source: &RuleSource) -> miette::Result<i32> {
    let store = match source.load() {
        Ok(store) => store,
        Err(e) => return Ok(e.report()),
    };
    let rules = match rules_for(&store, &args.lang) {
        Ok(rules) => rules,
        Err(e) => return Ok(e.report()),
    };

    let mut results = Vec::with_capacity(args.numbers.len());
    for number in &args.numbers {
        let operands = match number.parse::<PluralOperands>() {
            Ok(operands) => operands,
            Err(e) => {
                eprintln!("{} {e}", "error:".red().bold());
                return Ok(exitcode::DATAERR);
            }
        };
        let operands = match args.fraction_digits {
            Some(digits) => operands.with_fraction_digits(digits),
            None => operands,
        };
        results.push(Classification {
            number: number.clone(),
            category: rules.category_for(operands),
            explanation: args.explain.then(|| rules.explain(operands)),
        });
    }

    if args.json {
        let json = serde_json::to_string_pretty(&results).into_diagnostic()?;
        println!("{json}");
    } else {
        for result in &results {
            println!("{}\t{}", result.number, result.category.bold());
            if let Some(explanation) = &result.explanation {
                print_explanation(explanation);
            }
        }
    }
    Ok(exitcode::OK)
}

fn print_explanation(explanation: &Explanation) {
    let operands = explanation.operands;
    println!(
        "  {}",
        format!(
            "n={} i={} v={} w={} f={} t={} c={}",
            operands.n(),
            operands.i(),
            operands.v(),
            operands.w(),
            operands.f(),
            operands.t(),
            operands.c()
        )
        .dimmed()
    );
    for rule in &explanation.rules {
        let verdict = if rule.matched {
            "match".green().to_string()
        } else {
            "no match".dimmed().to_string()
        };
        println!("  {:<6} {}  {verdict}", rule.category, rule.condition);
        for (index, group) in rule.groups.iter().enumerate() {
            if index > 0 {
                println!("         {}", "or".dimmed());
            }
            for condition in &group.conditions {
                let value = condition
                    .value
                    .map_or_else(|| "?".to_string(), |value| value.to_string());
                let mark = if condition.matched { "✓" } else { "✗" };
                println!("         {mark} {} (value {value})", condition.clause);
            }
        }
    }
    if explanation.category == PluralCategory::Other {
        println!("  {:<6} {}", "other", "(no rule matched)".dimmed());
    }
}
