//! Expansion of `@integer` / `@decimal` sample lists.
//!
//! Sample lists are comma separated. A token is a numeral (`5`, `1.0`), a
//! range (`5~19`, `0.0~1.5`), a compact numeral (`1c6`, `1.1e6`) kept
//! verbatim, or an ellipsis meaning "and so on", which is dropped.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use tracing::warn;

use crate::types::{OperandsError, PluralOperands};

/// Ranges never expand to more than this many samples.
pub const MAX_RANGE_SAMPLES: usize = 10_000;

/// A concrete sample value from a rule's sample list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Sample {
    /// A plain number with its visible fraction digit count.
    Number { value: f64, fraction_digits: usize },
    /// A compact numeral such as `1c6`, kept as written.
    Compact(String),
}

impl Sample {
    /// An integer sample.
    pub fn integer(value: u64) -> Sample {
        Sample::Number {
            value: value as f64,
            fraction_digits: 0,
        }
    }

    /// A decimal sample printed with `fraction_digits` digits.
    pub fn decimal(value: f64, fraction_digits: usize) -> Sample {
        Sample::Number {
            value,
            fraction_digits,
        }
    }

    /// Plural operands of the sample as written.
    pub fn operands(&self) -> Result<PluralOperands, OperandsError> {
        self.to_string().parse()
    }
}

impl Display for Sample {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Sample::Number {
                value,
                fraction_digits,
            } => write!(f, "{value:.fraction_digits$}"),
            Sample::Compact(token) => f.write_str(token),
        }
    }
}

/// Expand a sample list into concrete samples.
///
/// `fraction_digits` sets a minimum fraction digit count; a token written
/// with more digits keeps its own count. Decimal ranges step by
/// `10^-digits`.
///
/// # Examples
///
/// ```
/// use cldr_plurals::parser::{Sample, expand_samples};
///
/// assert_eq!(
///     expand_samples("0~3", None),
///     vec![Sample::integer(0), Sample::integer(1), Sample::integer(2), Sample::integer(3)]
/// );
///
/// let decimals: Vec<String> = expand_samples("0.0~0.3", Some(1))
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(decimals, ["0.0", "0.1", "0.2", "0.3"]);
///
/// assert_eq!(
///     expand_samples("1c3, 2c3, …", None),
///     vec![Sample::Compact("1c3".into()), Sample::Compact("2c3".into())]
/// );
/// ```
pub fn expand_samples(text: &str, fraction_digits: Option<usize>) -> Vec<Sample> {
    let min_digits = fraction_digits.unwrap_or(0);
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .flat_map(|token| expand_token(token, min_digits))
        .collect()
}

fn expand_token(token: &str, min_digits: usize) -> Vec<Sample> {
    if token == "…" || token == "..." {
        return Vec::new();
    }
    if token.contains(['c', 'e']) {
        return vec![Sample::Compact(token.to_string())];
    }
    let expanded = match token.split_once('~') {
        Some((start, end)) => expand_range(start.trim(), end.trim(), min_digits),
        None => {
            let digits = min_digits.max(fraction_width(token));
            scaled(token, digits).map(|value| vec![number(value, digits)])
        }
    };
    expanded.unwrap_or_else(|| {
        warn!(token, "skipping malformed plural sample");
        Vec::new()
    })
}

fn expand_range(start: &str, end: &str, min_digits: usize) -> Option<Vec<Sample>> {
    let digits = min_digits
        .max(fraction_width(start))
        .max(fraction_width(end));
    let first = scaled(start, digits)?;
    let last = scaled(end, digits)?;
    if last < first {
        warn!(start, end, "plural sample range is empty");
        return Some(Vec::new());
    }
    if last - first >= MAX_RANGE_SAMPLES as u64 {
        warn!(
            start,
            end,
            limit = MAX_RANGE_SAMPLES,
            "truncating oversized plural sample range"
        );
    }
    Some(
        (first..=last)
            .take(MAX_RANGE_SAMPLES)
            .map(|value| number(value, digits))
            .collect(),
    )
}

fn number(value: u64, digits: usize) -> Sample {
    Sample::Number {
        value: value as f64 / 10f64.powi(digits as i32),
        fraction_digits: digits,
    }
}

/// Number of digits after the decimal point in a numeral token.
fn fraction_width(token: &str) -> usize {
    token
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

/// A decimal token as an integer scaled by `10^digits`.
fn scaled(token: &str, digits: usize) -> Option<u64> {
    let (integer, fraction) = token.split_once('.').unwrap_or((token, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
        return None;
    }
    if fraction.len() > digits {
        return None;
    }
    let padding = "0".repeat(digits - fraction.len());
    format!("{integer}{fraction}{padding}").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_pads_fraction() {
        assert_eq!(scaled("1.5", 2), Some(150));
        assert_eq!(scaled("7", 1), Some(70));
        assert_eq!(scaled("1.25", 1), None);
        assert_eq!(scaled("x", 0), None);
    }

    #[test]
    fn fraction_width_counts_digits_after_point() {
        assert_eq!(fraction_width("10.00"), 2);
        assert_eq!(fraction_width("10"), 0);
    }
}
