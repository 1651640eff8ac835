//! Table formatting utilities for CLI output.

use cldr_plurals::PluralCategory;
use comfy_table::{presets, ContentArrangement, Table};

/// Samples longer than this are cut and end in an ellipsis.
const MAX_SHOWN_SAMPLES: usize = 12;

/// One row of the samples grid.
pub struct SampleRow {
    pub category: PluralCategory,
    /// Canonical condition text; empty for `other`.
    pub condition: String,
    pub integers: Vec<String>,
    pub decimals: Vec<String>,
}

/// Format a language's categories, rules and samples as a table.
pub fn format_samples_table(rows: &[SampleRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Rule", "Integers", "Decimals"]);

    for row in rows {
        table.add_row(vec![
            row.category.to_string(),
            row.condition.clone(),
            shorten(&row.integers),
            shorten(&row.decimals),
        ]);
    }

    table
}

fn shorten(samples: &[String]) -> String {
    let mut shown = samples
        .iter()
        .take(MAX_SHOWN_SAMPLES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if samples.len() > MAX_SHOWN_SAMPLES {
        shown.push_str(", …");
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorten_truncates_long_lists() {
        let samples: Vec<String> = (0..20).map(|n| format!("{n}")).collect();
        assert_eq!(shorten(&samples[..3]), "0, 1, 2");
        assert!(shorten(&samples).ends_with("10, 11, …"));
    }
}
