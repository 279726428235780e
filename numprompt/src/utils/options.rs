//! # Reader options
//!
//! Per-call configuration for the prompted readers. Every field has a sane
//! default, so most callers only flip the one or two switches they care about:
//!
//! ```rust
//! use numprompt::utils::{OverlongLine, ReadOptions};
//!
//! let options = ReadOptions::new()
//!     .with_allow_negative(true)
//!     .with_max_retries(3)
//!     .with_overlong(OverlongLine::Reject);
//!
//! assert!(options.validate);
//! ```
use std::num::NonZeroU32;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum bytes of one line, terminator included.
pub const LINE_CAPACITY: usize = 256;

/// What to do with a line that does not fit in [`LINE_CAPACITY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverlongLine {
    /// Keep the first `LINE_CAPACITY - 1` bytes and drop the rest of the line.
    ///
    /// The kept prefix is validated on its own and the dropped tail is never
    /// seen, so a long line can be accepted as a different number: `"0."`
    /// followed by 300 zeros and a `5` reads as `0.0`. A C `fgets` loop would
    /// instead reject the cut-off buffer and read the tail as the next line.
    /// Use [`OverlongLine::Reject`] when that matters.
    #[default]
    Truncate,
    /// Fail the call with [`crate::utils::ReadError::LineTooLong`].
    Reject,
}

/// Options for a single `read_int` / `read_float` call.
///
/// - `validate`: run the sanitizer and retry on bad input. When `false`, the
///   first line is converted as-is and unparsable text becomes zero.
/// - `allow_negative`: accept a leading `-`. Ignored when `validate` is off.
/// - `max_retries`: give up after this many rejected lines. `None` retries
///   forever.
/// - `overlong`: see [`OverlongLine`].
/// - `highlight`: style diagnostics for a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReadOptions {
    pub validate: bool,
    pub allow_negative: bool,
    pub max_retries: Option<NonZeroU32>,
    pub overlong: OverlongLine,
    pub highlight: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            validate: true,
            allow_negative: false,
            max_retries: None,
            overlong: OverlongLine::Truncate,
            highlight: true,
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that skip validation entirely.
    pub fn unchecked() -> Self {
        Self {
            validate: false,
            ..Self::default()
        }
    }

    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn with_allow_negative(mut self, allow_negative: bool) -> Self {
        self.allow_negative = allow_negative;
        self
    }

    /// Caps the number of rejected lines. `0` removes the cap.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = NonZeroU32::new(max_retries);
        self
    }

    pub fn with_overlong(mut self, overlong: OverlongLine) -> Self {
        self.overlong = overlong;
        self
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// `true` once `rejected` lines reach the configured cap.
    pub(crate) fn retries_exhausted(&self, rejected: u32) -> bool {
        self.max_retries.is_some_and(|max| rejected >= max.get())
    }
}
