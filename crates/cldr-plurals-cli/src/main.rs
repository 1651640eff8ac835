//! cldr-plurals CLI entry point.
//!
//! Provides command-line tools over a CLDR `plurals.json` / `ordinals.json`:
//! - `cldr-plurals classify` - Print the plural category of numbers
//! - `cldr-plurals check` - Validate rules and their samples
//! - `cldr-plurals samples` - Show each category's rule and samples

mod commands;
mod output;

use std::io::stderr;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use cldr_plurals::RuleType;
use commands::{
    run_check, run_classify, run_samples, CheckArgs, ClassifyArgs, RuleSource, SamplesArgs,
};
use tracing_subscriber::EnvFilter;

/// CLDR plural rule tools.
#[derive(Debug, Parser)]
#[command(name = "cldr-plurals")]
#[command(about = "CLDR plural rule tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// CLDR supplemental plurals JSON file
    #[arg(long, env = "CLDR_PLURALS_RULES", global = true)]
    pub rules: Option<PathBuf>,

    /// Use the ordinal rule section instead of the cardinal one
    #[arg(long, global = true)]
    pub ordinal: bool,

    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the plural category of one or more numbers
    Classify(ClassifyArgs),
    /// Report unparseable rules and samples that misclassify
    Check(CheckArgs),
    /// Show each category's rule and expanded samples
    Samples(SamplesArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Send library logs to stderr. `RUST_LOG` overrides `--verbose`.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let source = RuleSource {
        path: cli.rules,
        rule_type: if cli.ordinal {
            RuleType::Ordinal
        } else {
            RuleType::Cardinal
        },
    };

    let result = match cli.command {
        Commands::Classify(args) => run_classify(args, &source),
        Commands::Check(args) => run_check(args, &source),
        Commands::Samples(args) => run_samples(args, &source),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
