//! Miette diagnostics pointing into plural rule text.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use cldr_plurals::{LoadWarning, SampleMismatch};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for one finding in a rule.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(cldr_plurals::check))]
pub struct RuleDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: Option<SourceSpan>,

    message: String,

    #[help]
    help: Option<String>,
}

impl RuleDiagnostic {
    /// Create a diagnostic from a load warning. `rule_text` is the full
    /// rule the warning came from, when there is one.
    pub fn from_warning(warning: &LoadWarning, rule_text: Option<&str>) -> Self {
        let name = match warning.category() {
            Some(category) => format!("{}/{category}", warning.language()),
            None => warning.language().to_string(),
        };
        let (text, span, help): (&str, Option<SourceSpan>, &str) = match warning {
            LoadWarning::UnparseableCondition { clause, .. } => {
                let text = rule_text.unwrap_or(clause.as_str());
                (
                    text,
                    text.find(clause.as_str())
                        .map(|start| (start, clause.len()).into()),
                    "the clause never matches, so its AND-group never matches",
                )
            }
            LoadWarning::UnknownOperand { symbol, .. } => {
                let text = rule_text.unwrap_or_default();
                (
                    text,
                    operand_span(text, *symbol),
                    "plural operands are n, i, v, w, f, t, c and e",
                )
            }
            LoadWarning::UnknownCategoryKey { key, .. } => (
                key.as_str(),
                Some((0, key.len()).into()),
                "rule labels are pluralRule-count-<zero|one|two|few|many|other>",
            ),
        };
        RuleDiagnostic {
            src: NamedSource::new(name, text.to_string()),
            span,
            message: warning.to_string(),
            help: Some(help.to_string()),
        }
    }

    /// Create a diagnostic for a sample listed under the wrong category.
    pub fn from_mismatch(language: &str, mismatch: &SampleMismatch, rule_text: &str) -> Self {
        let sample = mismatch.sample.to_string();
        let message = match mismatch.actual {
            Some(actual) => format!(
                "{language}/{}: sample {sample} classifies as '{actual}'",
                mismatch.expected
            ),
            None => format!(
                "{language}/{}: sample {sample} is not a valid number",
                mismatch.expected
            ),
        };
        RuleDiagnostic {
            src: NamedSource::new(
                format!("{language}/{}", mismatch.expected),
                rule_text.to_string(),
            ),
            span: token_span(rule_text, &sample),
            message,
            help: None,
        }
    }
}

/// Span of the first relation that reads `symbol`.
fn operand_span(text: &str, symbol: char) -> Option<SourceSpan> {
    let bytes = text.as_bytes();
    text.char_indices()
        .find(|&(index, c)| {
            let before = index.checked_sub(1).map(|i| bytes[i]);
            let after = bytes.get(index + c.len_utf8()).copied();
            c == symbol
                && before.is_none_or(|b| b.is_ascii_whitespace())
                && after.is_none_or(|b| matches!(b, b' ' | b'%' | b'=' | b'!'))
        })
        .map(|(index, c)| (index, c.len_utf8()).into())
}

/// Span of `token` as a whole sample in the rule's sample sections.
///
/// Samples expanded from a range have no span of their own.
fn token_span(text: &str, token: &str) -> Option<SourceSpan> {
    let bytes = text.as_bytes();
    let samples_start = text.find('@')?;
    let is_number_byte = |b: u8| b.is_ascii_digit() || b == b'.' || b == b'~';
    text.match_indices(token)
        .filter(|&(start, _)| start > samples_start)
        .find(|&(start, _)| {
            let end = start + token.len();
            let before = start.checked_sub(1).map(|i| bytes[i]);
            let after = bytes.get(end).copied();
            !before.is_some_and(is_number_byte) && !after.is_some_and(is_number_byte)
        })
        .map(|(start, _)| (start, token.len()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_span_skips_letters_inside_words() {
        let span = operand_span("n = 1 and q = 3", 'q').unwrap();
        assert_eq!(span.offset(), 10);
        assert_eq!(operand_span("n = 1", 'q'), None);
    }

    #[test]
    fn token_span_matches_whole_samples() {
        let text = "i = 1 @integer 21, 1, 101";
        let span = token_span(text, "1").unwrap();
        assert_eq!(span.offset(), 19);
        assert_eq!(token_span("@integer 1~5", "5"), None);
    }
}
