//! # Line Sanitizer
//!
//! A pure, character-level check that decides whether one raw line of user
//! input is a number of the requested shape. Nothing is parsed here: the
//! sanitizer only walks the bytes once, left to right, and answers yes or no.
//!
//! ## Grammar
//! - An optional leading `-`, only when negatives are allowed.
//! - One or more characters, each an ASCII digit or, when floats are allowed,
//!   a `.` (any number of them).
//! - The scan stops at the first `'\n'` or at the end of the string.
//!
//! A bare sign or a bare newline is never a number. Digit count is not
//! bounded; overflow is handled by the conversion step.
//!
//! ## Example
//! ```rust
//! use numprompt::utils::{is_valid_number, Policy};
//!
//! assert!(is_valid_number("42\n", false, false));
//! assert!(!is_valid_number("-42\n", false, false));
//! assert!(Policy::float(true).accepts("-3.14\n"));
//! ```
use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const TERMINATOR: u8 = b'\n';
const MINUS: u8 = b'-';
const DECIMAL_POINT: u8 = b'.';

/// Returns `true` if `line` is a syntactically valid number.
///
/// - `allow_negative`: a single leading `-` is accepted.
/// - `allow_float`: `.` characters are accepted anywhere after the sign.
///
/// Empty input, a bare `-` and a bare `"\n"` are rejected.
pub fn is_valid_number(line: &str, allow_negative: bool, allow_float: bool) -> bool {
    let bytes = line.as_bytes();

    let Some(&first) = bytes.first() else {
        return false;
    };

    let mut i = 0;
    if first == MINUS {
        if !allow_negative {
            return false;
        }
        i += 1;
    }

    let body = &bytes[i..];
    let body = match body.iter().position(|&b| b == TERMINATOR) {
        Some(end) => &body[..end],
        None => body,
    };

    if body.is_empty() {
        return false;
    }

    body.iter()
        .all(|&b| b.is_ascii_digit() || (allow_float && b == DECIMAL_POINT))
}

/// The Validation Policy: which optional characters a line may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Policy {
    pub allow_negative: bool,
    pub allow_float: bool,
}

impl Policy {
    /// Policy used by the integer reader.
    pub const fn integer(allow_negative: bool) -> Self {
        Self {
            allow_negative,
            allow_float: false,
        }
    }

    /// Policy used by the float reader.
    pub const fn float(allow_negative: bool) -> Self {
        Self {
            allow_negative,
            allow_float: true,
        }
    }

    /// Runs [`is_valid_number`] with this policy.
    pub fn accepts(&self, line: &str) -> bool {
        is_valid_number(line, self.allow_negative, self.allow_float)
    }
}

/// The numeric shape a reader produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumberKind {
    Integer,
    Float,
}

impl NumberKind {
    pub const fn allows_float(&self) -> bool {
        matches!(self, Self::Float)
    }

    /// Builds the [`Policy`] for this shape.
    pub const fn policy(&self, allow_negative: bool) -> Policy {
        Policy {
            allow_negative,
            allow_float: self.allows_float(),
        }
    }
}

impl Display for NumberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_digits_only() {
        assert!(is_valid_number("0", false, false));
        assert!(is_valid_number("123\n", false, false));
        assert!(is_valid_number("0007\n", false, false));
    }

    #[test]
    fn test_sanitize_empty_and_bare_newline() {
        for (neg, float) in [(false, false), (true, false), (false, true), (true, true)] {
            assert!(!is_valid_number("", neg, float));
            assert!(!is_valid_number("\n", neg, float));
        }
    }

    #[test]
    fn test_sanitize_bare_sign() {
        assert!(!is_valid_number("-", true, false));
        assert!(!is_valid_number("-\n", true, true));
        assert!(!is_valid_number("-", false, false));
    }

    #[test]
    fn test_sanitize_negative_policy() {
        assert!(!is_valid_number("-5", false, false));
        assert!(is_valid_number("-5", true, false));
        assert!(is_valid_number("-5\n", true, false));
        // only one leading sign
        assert!(!is_valid_number("--5", true, false));
        assert!(!is_valid_number("5-", true, false));
    }

    #[test]
    fn test_sanitize_float_policy() {
        assert!(is_valid_number("3.14", false, true));
        assert!(!is_valid_number("3.14", false, false));
        assert!(is_valid_number("-0.5\n", true, true));
        assert!(!is_valid_number("-0.5\n", false, true));
    }

    #[test]
    fn test_sanitize_multiple_decimal_points_are_accepted() {
        // Lax on purpose: the scan does not count decimal points.
        assert!(is_valid_number("1.2.3\n", false, true));
        assert!(is_valid_number("..", false, true));
        assert!(is_valid_number(".\n", false, true));
    }

    #[test]
    fn test_sanitize_rejects_other_characters() {
        assert!(!is_valid_number("abc\n", true, true));
        assert!(!is_valid_number("12a\n", true, true));
        assert!(!is_valid_number(" 12\n", true, true));
        assert!(!is_valid_number("12 \n", true, true));
        assert!(!is_valid_number("+12\n", true, true));
        assert!(!is_valid_number("1e5\n", true, true));
        assert!(!is_valid_number("12\r\n", true, true));
        assert!(!is_valid_number("\u{665}\n", true, true)); // arabic-indic five
    }

    #[test]
    fn test_sanitize_stops_at_first_newline() {
        assert!(is_valid_number("42\ngarbage", false, false));
    }

    #[test]
    fn test_sanitize_no_digit_limit() {
        let long = "9".repeat(400);
        assert!(is_valid_number(&long, false, false));
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for line in ["42\n", "-1\n", "x\n", "1.5\n", ""] {
            let first = is_valid_number(line, true, true);
            let second = is_valid_number(line, true, true);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_policy_matches_free_function() {
        assert_eq!(Policy::integer(false), NumberKind::Integer.policy(false));
        assert_eq!(Policy::float(true), NumberKind::Float.policy(true));
        assert!(Policy::integer(true).accepts("-9\n"));
        assert!(!Policy::integer(true).accepts("-9.0\n"));
        assert!(Policy::float(false).accepts("9.0\n"));
    }

    #[test]
    fn test_number_kind_display() {
        assert_eq!(format!("{}", NumberKind::Integer), "integer");
        assert_eq!(format!("{}", NumberKind::Float), "float");
    }
}
