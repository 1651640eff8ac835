//! Parse error types for plural rule conditions.

use thiserror::Error;

/// An error that occurred while parsing a condition clause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The clause does not match `operand [% modulus] (=|!=) values`.
    #[error("syntax error at column {column}: {message}")]
    Syntax { column: usize, message: String },

    /// A `% 0` modulus.
    #[error("modulus must be a positive integer")]
    ZeroModulus,

    /// A range whose end is below its start.
    #[error("range {start}..{end} is empty")]
    EmptyRange { start: u64, end: u64 },
}
