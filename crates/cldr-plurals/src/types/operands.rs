//! Plural operands as defined by Unicode TR35.
//!
//! A number is reduced to a handful of operands (`n`, `i`, `v`, `w`, `f`,
//! `t`, `c`/`e`) before any rule is evaluated. Operands are computed from the
//! decimal digits of the input, never from binary floating point arithmetic,
//! so `"1.50"` keeps its trailing zero and `"1.5c3"` becomes `1500` exactly.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use winnow::ascii::digit1;
use winnow::combinator::{opt, preceded};
use winnow::prelude::*;
use winnow::token::one_of;

/// Integer operands keep at most this many low-order digits before folding.
const FOLD_DIGITS: usize = 18;

/// `10^FOLD_DIGITS`, the offset added to folded operands.
const FOLD_BASE: u64 = 1_000_000_000_000_000_000;

/// Largest exponent accepted in compact or exponential notation.
const MAX_EXPONENT: u64 = 1000;

/// A TR35 operand symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operand {
    /// Absolute value of the number.
    N,
    /// Integer digits.
    I,
    /// Number of visible fraction digits, with trailing zeros.
    V,
    /// Number of visible fraction digits, without trailing zeros.
    W,
    /// Visible fraction digits as an integer, with trailing zeros.
    F,
    /// Visible fraction digits as an integer, without trailing zeros.
    T,
    /// Compact decimal exponent.
    C,
    /// Synonym of `C` kept for older rule data.
    E,
}

impl Operand {
    /// Every operand, in TR35 table order.
    pub const ALL: [Operand; 8] = [
        Operand::N,
        Operand::I,
        Operand::V,
        Operand::W,
        Operand::F,
        Operand::T,
        Operand::C,
        Operand::E,
    ];

    /// Look up an operand by its rule-syntax symbol.
    pub fn from_symbol(symbol: char) -> Option<Operand> {
        Operand::ALL
            .into_iter()
            .find(|operand| operand.symbol() == symbol)
    }

    /// The symbol used for this operand in rule text.
    pub fn symbol(self) -> char {
        match self {
            Operand::N => 'n',
            Operand::I => 'i',
            Operand::V => 'v',
            Operand::W => 'w',
            Operand::F => 'f',
            Operand::T => 't',
            Operand::C => 'c',
            Operand::E => 'e',
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Errors raised when a value cannot be turned into plural operands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperandsError {
    /// Input is not a decimal numeral in plain, compact or exponential form.
    #[error("'{input}' is not a plain, compact or exponential decimal numeral")]
    Malformed { input: String },

    /// Floating point input was NaN or infinite.
    #[error("cannot take plural operands of non-finite value {value}")]
    NonFinite { value: f64 },

    /// Exponent shifts the decimal point further than supported.
    #[error("exponent {exponent} in '{input}' exceeds the supported range of ±{}", MAX_EXPONENT)]
    ExponentOutOfRange { input: String, exponent: i64 },
}

/// The TR35 operands of one number.
///
/// # Examples
///
/// ```
/// use cldr_plurals::PluralOperands;
///
/// let operands: PluralOperands = "1.50".parse().unwrap();
/// assert_eq!(operands.i(), 1);
/// assert_eq!(operands.v(), 2);
/// assert_eq!(operands.w(), 1);
/// assert_eq!(operands.f(), 50);
/// assert_eq!(operands.t(), 5);
///
/// let compact: PluralOperands = "1.5c3".parse().unwrap();
/// assert_eq!(compact.i(), 1500);
/// assert_eq!(compact.c(), 3);
/// ```
///
/// Integer digit strings longer than eighteen digits are folded to
/// `10^18 + (low eighteen digits)`. Every power-of-ten modulus stays exact and
/// a folded value never equals a small literal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PluralOperands {
    n: f64,
    i: u64,
    v: usize,
    w: usize,
    f: u64,
    t: u64,
    c: usize,
}

impl PluralOperands {
    /// Absolute value of the number.
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Integer part, truncated toward zero.
    pub fn i(&self) -> u64 {
        self.i
    }

    /// Visible fraction digit count, with trailing zeros.
    pub fn v(&self) -> usize {
        self.v
    }

    /// Visible fraction digit count, without trailing zeros.
    pub fn w(&self) -> usize {
        self.w
    }

    /// Visible fraction digits, with trailing zeros.
    pub fn f(&self) -> u64 {
        self.f
    }

    /// Visible fraction digits, without trailing zeros.
    pub fn t(&self) -> u64 {
        self.t
    }

    /// Compact decimal exponent; 0 when the input had none.
    pub fn c(&self) -> usize {
        self.c
    }

    /// Raise the visible fraction digit count to at least `digits`.
    ///
    /// This is how `1` written as `1.0` is modelled: `v` and `f` grow as if
    /// trailing zeros had been printed, while `w` and `t` are unchanged.
    ///
    /// ```
    /// use cldr_plurals::PluralOperands;
    ///
    /// let operands = PluralOperands::from(1u32).with_fraction_digits(2);
    /// assert_eq!((operands.v(), operands.f(), operands.w()), (2, 0, 0));
    ///
    /// let operands: PluralOperands = "1.5".parse().unwrap();
    /// let padded = operands.with_fraction_digits(2);
    /// assert_eq!((padded.v(), padded.f(), padded.t()), (2, 50, 5));
    /// ```
    pub fn with_fraction_digits(self, digits: usize) -> Self {
        if digits <= self.v {
            return self;
        }
        PluralOperands {
            f: pad_fraction(self.f, digits - self.v),
            v: digits,
            ..self
        }
    }

    /// Value of an operand.
    pub fn value(&self, operand: Operand) -> f64 {
        match operand {
            Operand::N => self.n,
            other => self.integer_value(other) as f64,
        }
    }

    /// Value of the operand named by `symbol`, or `None` when the symbol is
    /// not a TR35 operand.
    ///
    /// ```
    /// use cldr_plurals::PluralOperands;
    ///
    /// let operands: PluralOperands = "1.50".parse().unwrap();
    /// assert_eq!(operands.operand('v'), Some(2.0));
    /// assert_eq!(operands.operand('t'), Some(5.0));
    /// assert_eq!(operands.operand('x'), None);
    /// ```
    pub fn operand(&self, symbol: char) -> Option<f64> {
        Operand::from_symbol(symbol).map(|operand| self.value(operand))
    }

    /// Value of an operand reduced by an optional modulus.
    ///
    /// `n` keeps its fraction (`10.1 % 100` stays `10.1`), with the integer
    /// part reduced exactly from `i`. Every other operand is reduced exactly
    /// as an integer. A zero modulus yields `None`.
    pub fn reduced(&self, operand: Operand, modulus: Option<u64>) -> Option<f64> {
        let Some(modulus) = modulus else {
            return Some(self.value(operand));
        };
        if modulus == 0 {
            return None;
        }
        match operand {
            Operand::N => Some((self.i % modulus) as f64 + self.fraction_value()),
            other => Some((self.integer_value(other) % modulus) as f64),
        }
    }

    /// Fractional part of `n`, rebuilt from `t` and `w`.
    fn fraction_value(&self) -> f64 {
        if self.w == 0 {
            return 0.0;
        }
        if self.w > FOLD_DIGITS {
            return self.n.fract();
        }
        self.t as f64 / 10u64.pow(self.w as u32) as f64
    }

    fn integer_value(&self, operand: Operand) -> u64 {
        match operand {
            Operand::N | Operand::I => self.i,
            Operand::V => self.v as u64,
            Operand::W => self.w as u64,
            Operand::F => self.f,
            Operand::T => self.t,
            Operand::C | Operand::E => self.c as u64,
        }
    }

    /// Build operands from decimal digit strings and a signed power-of-ten
    /// exponent.
    fn from_digits(integer: &str, fraction: &str, exponent: i64) -> Self {
        let (integer, fraction) = shift_point(integer, fraction, exponent);
        let integer = match integer.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        let significant = fraction.trim_end_matches('0');
        let n = if fraction.is_empty() {
            integer.parse::<f64>()
        } else {
            format!("{integer}.{fraction}").parse::<f64>()
        }
        .unwrap_or(f64::INFINITY);

        PluralOperands {
            n,
            i: fold_digits(integer),
            v: fraction.len(),
            w: significant.len(),
            f: fold_digits(&fraction),
            t: fold_digits(significant),
            c: usize::try_from(exponent.max(0)).unwrap_or(0),
        }
    }

    fn from_u64(value: u64) -> Self {
        PluralOperands {
            n: value as f64,
            i: fold_integer(value),
            ..PluralOperands::default()
        }
    }
}

/// Parsed pieces of a numeral string.
struct Numeral<'i> {
    integer: &'i str,
    fraction: &'i str,
    exponent: Option<&'i str>,
}

/// Parse `[-]digits[.digits][(c|e|E)[+-]digits]`.
fn numeral<'i>(input: &mut &'i str) -> ModalResult<Numeral<'i>> {
    let _ = opt('-').parse_next(input)?;
    let integer = digit1.parse_next(input)?;
    let fraction = opt(preceded('.', digit1)).parse_next(input)?;
    let exponent = opt(preceded(
        one_of(['c', 'e', 'E']),
        (opt(one_of(['+', '-'])), digit1).take(),
    ))
    .parse_next(input)?;
    Ok(Numeral {
        integer,
        fraction: fraction.unwrap_or(""),
        exponent,
    })
}

impl FromStr for PluralOperands {
    type Err = OperandsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = numeral.parse(trimmed).map_err(|_| OperandsError::Malformed {
            input: s.to_string(),
        })?;
        let exponent = match parsed.exponent {
            Some(text) => text.parse::<i64>().map_err(|_| OperandsError::Malformed {
                input: s.to_string(),
            })?,
            None => 0,
        };
        if exponent.unsigned_abs() > MAX_EXPONENT {
            return Err(OperandsError::ExponentOutOfRange {
                input: s.to_string(),
                exponent,
            });
        }
        Ok(PluralOperands::from_digits(
            parsed.integer,
            parsed.fraction,
            exponent,
        ))
    }
}

impl TryFrom<f64> for PluralOperands {
    type Error = OperandsError;

    /// Uses the shortest decimal representation of the float, so `1.5`
    /// has one visible fraction digit and `2.0` has none. Combine with
    /// [`PluralOperands::with_fraction_digits`] to model trailing zeros.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(OperandsError::NonFinite { value });
        }
        format!("{}", value.abs()).parse()
    }
}

impl TryFrom<f32> for PluralOperands {
    type Error = OperandsError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(OperandsError::NonFinite {
                value: f64::from(value),
            });
        }
        format!("{}", value.abs()).parse()
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PluralOperands {
                fn from(value: $ty) -> Self {
                    PluralOperands::from_u64(value as u64)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PluralOperands {
                fn from(value: $ty) -> Self {
                    PluralOperands::from_u64(value.unsigned_abs() as u64)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

/// Move the decimal point of `integer.fraction` by `exponent` places.
fn shift_point(integer: &str, fraction: &str, exponent: i64) -> (String, String) {
    let digits = format!("{integer}{fraction}");
    let point = integer.len() as i64 + exponent;
    if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        return ("0".to_string(), format!("{zeros}{digits}"));
    }
    let point = point.unsigned_abs() as usize;
    if point >= digits.len() {
        let zeros = "0".repeat(point - digits.len());
        (format!("{digits}{zeros}"), String::new())
    } else {
        let (integer, fraction) = digits.split_at(point);
        (integer.to_string(), fraction.to_string())
    }
}

/// Numeric value of a digit string, folded past eighteen digits.
fn fold_digits(digits: &str) -> u64 {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return 0;
    }
    if digits.len() <= FOLD_DIGITS {
        return digits.parse().unwrap_or(0);
    }
    let low = &digits[digits.len() - FOLD_DIGITS..];
    FOLD_BASE + low.parse::<u64>().unwrap_or(0)
}

fn fold_integer(value: u64) -> u64 {
    if value < FOLD_BASE {
        value
    } else {
        FOLD_BASE + value % FOLD_BASE
    }
}

/// Append `extra` zero digits to a fraction value, folding on the count of
/// significant digits the same way [`fold_digits`] does.
fn pad_fraction(fraction: u64, extra: usize) -> u64 {
    if fraction == 0 {
        return 0;
    }
    if extra >= FOLD_DIGITS {
        return FOLD_BASE;
    }
    let shifted = u128::from(fraction % FOLD_BASE) * 10u128.pow(extra as u32);
    if fraction < FOLD_BASE && shifted < u128::from(FOLD_BASE) {
        return shifted as u64;
    }
    FOLD_BASE + (shifted % u128::from(FOLD_BASE)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_point_moves_right_into_padding() {
        assert_eq!(shift_point("1", "5", 3), ("1500".into(), "".into()));
        assert_eq!(shift_point("1", "0000001", 6), ("1000000".into(), "1".into()));
    }

    #[test]
    fn shift_point_moves_left_past_integer() {
        assert_eq!(shift_point("12", "", -3), ("0".into(), "012".into()));
        assert_eq!(shift_point("12", "5", -1), ("1".into(), "25".into()));
    }

    #[test]
    fn fold_keeps_short_values_exact() {
        assert_eq!(fold_digits("000123"), 123);
        assert_eq!(fold_digits(""), 0);
        assert_eq!(fold_digits("999999999999999999"), 999_999_999_999_999_999);
    }

    #[test]
    fn fold_preserves_power_of_ten_remainders() {
        let folded = fold_digits("1234567890123456789012");
        assert_eq!(folded % 1000, 12);
        assert_eq!(folded % 1_000_000, 789_012);
        assert!(folded >= FOLD_BASE);
    }

    #[test]
    fn fold_integer_matches_fold_digits() {
        assert_eq!(fold_integer(u64::MAX), fold_digits(&u64::MAX.to_string()));
        assert_eq!(fold_integer(42), 42);
    }

    #[test]
    fn pad_fraction_folds_on_significant_digits() {
        assert_eq!(pad_fraction(5, 2), 500);
        assert_eq!(pad_fraction(5, 3), fold_digits("00000000000000005000"));
        assert_eq!(pad_fraction(0, 30), 0);
        assert_eq!(pad_fraction(7, 40), FOLD_BASE);
        assert_eq!(
            pad_fraction(123_456_789, 12),
            fold_digits("123456789000000000000")
        );
        let folded = fold_digits("1234567890123456789");
        assert_eq!(pad_fraction(folded, 2), fold_digits("123456789012345678900"));
    }
}
