//! # Permissive numeric conversion
//!
//! Converts an accepted line into its typed value. The rules mirror the
//! classic C `strtol`/`strtof` behaviour: leading whitespace is skipped, the
//! longest numeric prefix is used and anything after it is ignored. Text with
//! no numeric prefix converts to zero instead of failing.
use super::sanitize::NumberKind;

mod private {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for f32 {}
}

/// A numeric type the prompted readers can produce.
///
/// Implemented for `i32` and `f32` only.
pub trait Numeric: private::Sealed + Copy + std::fmt::Debug {
    const KIND: NumberKind;

    /// Converts `text`, never failing.
    fn from_lenient(text: &str) -> Self;
}

impl Numeric for i32 {
    const KIND: NumberKind = NumberKind::Integer;

    fn from_lenient(text: &str) -> Self {
        parse_int_lenient(text)
    }
}

impl Numeric for f32 {
    const KIND: NumberKind = NumberKind::Float;

    fn from_lenient(text: &str) -> Self {
        parse_float_lenient(text)
    }
}

/// Splits off an optional sign after leading whitespace.
///
/// Returns `(negative, rest)`.
fn split_sign(text: &str) -> (bool, &str) {
    let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

/// Number of leading ASCII digits in `bytes`.
fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Base-10 integer conversion of the longest digit prefix.
///
/// Returns `0` when there is no digit. Out-of-range values saturate.
pub fn parse_int_lenient(text: &str) -> i32 {
    let (negative, rest) = split_sign(text);
    let digits = &rest.as_bytes()[..digit_run(rest.as_bytes())];

    // Accumulate towards the sign so i32::MIN is reachable.
    let mut value: i32 = 0;
    for &d in digits {
        let d = i32::from(d - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}

/// Decimal/exponential float conversion of the longest valid prefix.
///
/// Accepts `inf`, `infinity` and `nan` in any case. Returns `0.0` when no
/// prefix is valid. Magnitudes beyond `f32` become infinite.
pub fn parse_float_lenient(text: &str) -> f32 {
    let (negative, rest) = split_sign(text);
    let bytes = rest.as_bytes();

    let magnitude = if let Some(special) = special_prefix(rest) {
        special
    } else {
        let int_len = digit_run(bytes);
        let mut end = int_len;
        let mut frac_len = 0;

        if bytes.get(end) == Some(&b'.') {
            frac_len = digit_run(&bytes[end + 1..]);
            end += 1 + frac_len;
        }

        if int_len + frac_len == 0 {
            return 0.0;
        }

        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_digits = digit_run(&bytes[exp.min(bytes.len())..]);
            if exp_digits > 0 {
                end = exp + exp_digits;
            }
        }

        rest[..end].parse::<f32>().unwrap_or(0.0)
    };

    if negative { -magnitude } else { magnitude }
}

fn special_prefix(text: &str) -> Option<f32> {
    let starts_with = |word: &str| {
        text.get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word))
    };

    if starts_with("inf") {
        Some(f32::INFINITY)
    } else if starts_with("nan") {
        Some(f32::NAN)
    } else {
        None
    }
}
