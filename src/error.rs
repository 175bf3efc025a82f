//! Errors surfaced by the public API.

use thiserror::Error;

/// Failure to parse a hex color string such as `#FF8800` or `ff880080`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHexError {
    /// A character that is not a hex digit (the leading `#` is allowed).
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
    /// Digit count other than 3, 6 or 8.
    #[error("expected 3, 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
}
