//! # Prompted Reader
//!
//! Reads one number from a line-oriented input stream. With validation on,
//! every line goes through the [sanitizer](crate::utils::sanitize) and a bad
//! line produces a short diagnostic on the error stream followed by another
//! read. The loop only ends with a value that passed the check, or with a
//! [`ReadError`] when the input runs out.
//!
//! ## Features
//! - Integer (`i32`) and float (`f32`) variants sharing one generic loop.
//! - Works on any [`BufRead`] + [`Write`] pair, stdin/stderr by default.
//! - Optional retry cap and strict handling of overlong lines
//!   (see [`ReadOptions`]).
//!
//! ## Usage
//!
//! ### Example 1: stdin/stderr
//! ```rust,no_run
//! use numprompt::utils::read_int;
//!
//! let mut age = 0;
//! read_int(&mut age, true, false).expect("stdin closed");
//! println!("Age: {age}");
//! ```
//!
//! ### Example 2: any reader
//! ```rust
//! use std::io::Cursor;
//! use numprompt::utils::{ReadOptions, Terminal};
//!
//! let input = Cursor::new("abc\n-1.5\n");
//! let mut terminal = Terminal::new(input, Vec::new());
//!
//! let mut value = 0.0_f32;
//! terminal
//!     .read_float(&mut value, ReadOptions::new().with_allow_negative(true))
//!     .unwrap();
//! assert_eq!(value, -1.5);
//! ```
use std::io::{self, BufRead, IsTerminal, Read, Stderr, StdinLock, Write};

use colored::Colorize;
use tracing::{debug, trace, warn};

use crate::utils::convert::Numeric;
use crate::utils::error::ReadError;
use crate::utils::options::{LINE_CAPACITY, OverlongLine, ReadOptions};
use crate::utils::sanitize::{NumberKind, Policy};

/// Plain text of the diagnostic shown after a rejected line.
///
/// ```rust
/// use numprompt::utils::{diagnostic_message, NumberKind};
///
/// assert_eq!(
///     diagnostic_message(NumberKind::Integer, true),
///     "Must be an integer! Retry..."
/// );
/// ```
pub fn diagnostic_message(kind: NumberKind, allow_negative: bool) -> String {
    let qualifier = match (kind, allow_negative) {
        (_, false) => " non-negative",
        (NumberKind::Integer, true) => "n",
        (NumberKind::Float, true) => "",
    };
    format!("Must be a{qualifier} {kind}! Retry...")
}

/// `true` when stderr is a terminal and `NO_COLOR` is unset.
pub fn stderr_wants_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal()
}

/// Makes `colored` style text according to stderr.
///
/// `colored` looks at stdout on its own, which is wrong for diagnostics:
/// `x=$(prog)` would lose the styling and `prog 2>log` would write escape
/// codes into the log. Call once at startup when diagnostics go to stderr.
pub fn color_for_stderr() {
    colored::control::set_override(stderr_wants_color());
}

/// Diagnostic as written to the error stream, surrounded by newlines.
pub(crate) fn render_diagnostic(kind: NumberKind, options: &ReadOptions) -> String {
    let message = diagnostic_message(kind, options.allow_negative);
    if options.highlight {
        format!("\n{}\n", message.as_str().red().italic())
    } else {
        format!("\n{message}\n")
    }
}

/// Turns the captured bytes of one line into text.
///
/// `overflowed` means the line did not fit in [`LINE_CAPACITY`]; the caller
/// has already discarded the rest of it.
pub(crate) fn finish_line(
    mut raw: Vec<u8>,
    overflowed: bool,
    overlong: OverlongLine,
) -> Result<String, ReadError> {
    if overflowed {
        match overlong {
            OverlongLine::Truncate => {
                warn!(limit = LINE_CAPACITY, "input line truncated");
                raw.truncate(LINE_CAPACITY - 1);
            }
            OverlongLine::Reject => {
                return Err(ReadError::LineTooLong {
                    limit: LINE_CAPACITY,
                });
            }
        }
    }

    if raw.ends_with(b"\r\n") {
        raw.remove(raw.len() - 2);
    }

    trace!(bytes = raw.len(), "captured input line");
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// `true` when a capped read filled the whole buffer without a newline.
pub(crate) fn overflowed(raw: &[u8]) -> bool {
    raw.len() >= LINE_CAPACITY && raw.last() != Some(&b'\n')
}

/// Outcome of checking one line.
pub(crate) enum Verdict {
    Accept,
    Retry,
    GiveUp(ReadError),
}

/// Retry bookkeeping for one read call.
pub(crate) struct Attempts {
    kind: NumberKind,
    policy: Policy,
    options: ReadOptions,
    rejected: u32,
}

impl Attempts {
    pub(crate) fn new(kind: NumberKind, options: ReadOptions) -> Self {
        Self {
            kind,
            policy: kind.policy(options.allow_negative),
            options,
            rejected: 0,
        }
    }

    pub(crate) fn judge(&mut self, line: &str) -> Verdict {
        if !self.options.validate || self.policy.accepts(line) {
            return Verdict::Accept;
        }

        self.rejected += 1;
        debug!(kind = %self.kind, attempt = self.rejected, "rejected input line");

        if self.options.retries_exhausted(self.rejected) {
            Verdict::GiveUp(ReadError::RetriesExhausted {
                attempts: self.rejected,
            })
        } else {
            Verdict::Retry
        }
    }

    pub(crate) fn diagnostic(&self) -> String {
        render_diagnostic(self.kind, &self.options)
    }
}

/// A line source paired with a diagnostic sink.
///
/// The terminal owns both streams for as long as it lives; use
/// [`Terminal::into_parts`] to get them back.
pub struct Terminal<R, W> {
    reader: R,
    diagnostics: W,
}

impl Terminal<StdinLock<'static>, Stderr> {
    /// Locked stdin and stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, diagnostics: W) -> Self {
        Self {
            reader,
            diagnostics,
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.diagnostics)
    }

    /// Reads an `i32` into `out`. `out` is only written on success.
    pub fn read_int(&mut self, out: &mut i32, options: ReadOptions) -> Result<(), ReadError> {
        self.read_into(out, options)
    }

    /// Reads an `f32` into `out`. `out` is only written on success.
    pub fn read_float(&mut self, out: &mut f32, options: ReadOptions) -> Result<(), ReadError> {
        self.read_into(out, options)
    }

    fn read_into<T: Numeric>(&mut self, out: &mut T, options: ReadOptions) -> Result<(), ReadError> {
        *out = self.read::<T>(options)?;
        Ok(())
    }

    /// Loops until a line passes validation, then converts it.
    ///
    /// The first read failing is [`ReadError::StreamClosed`]; so is the input
    /// closing while retrying.
    pub fn read<T: Numeric>(&mut self, options: ReadOptions) -> Result<T, ReadError> {
        let mut attempts = Attempts::new(T::KIND, options);
        let mut line = self.next_line(options.overlong)?;

        loop {
            match attempts.judge(&line) {
                Verdict::Accept => break,
                Verdict::GiveUp(e) => return Err(e),
                Verdict::Retry => {
                    self.write_diagnostic(&attempts.diagnostic())?;
                    line = self.next_line(options.overlong).inspect_err(|e| {
                        if e.is_stream_closed() {
                            debug!("input closed while retrying");
                        }
                    })?;
                }
            }
        }

        Ok(T::from_lenient(&line))
    }

    fn next_line(&mut self, overlong: OverlongLine) -> Result<String, ReadError> {
        let mut raw = Vec::with_capacity(LINE_CAPACITY);
        let read = (&mut self.reader)
            .take(LINE_CAPACITY as u64)
            .read_until(b'\n', &mut raw)
            .map_err(ReadError::read_failed)?;

        if read == 0 {
            return Err(ReadError::closed());
        }

        let overflowed = overflowed(&raw);
        if overflowed {
            self.reader
                .skip_until(b'\n')
                .map_err(ReadError::read_failed)?;
        }

        finish_line(raw, overflowed, overlong)
    }

    fn write_diagnostic(&mut self, text: &str) -> Result<(), ReadError> {
        self.diagnostics
            .write_all(text.as_bytes())
            .and_then(|()| self.diagnostics.flush())
            .map_err(ReadError::Diagnostic)
    }
}

/// Reads an `i32` from stdin, reporting bad lines on stderr.
///
/// `allow_negative` only matters when `validate` is `true`. Diagnostics are
/// styled only when stderr is a terminal (see [`color_for_stderr`]).
pub fn read_int(out: &mut i32, validate: bool, allow_negative: bool) -> Result<(), ReadError> {
    Terminal::stdio().read_int(out, stdio_options(validate, allow_negative))
}

/// Reads an `f32` from stdin, reporting bad lines on stderr.
///
/// `allow_negative` only matters when `validate` is `true`. Diagnostics are
/// styled only when stderr is a terminal (see [`color_for_stderr`]).
pub fn read_float(out: &mut f32, validate: bool, allow_negative: bool) -> Result<(), ReadError> {
    Terminal::stdio().read_float(out, stdio_options(validate, allow_negative))
}

fn stdio_options(validate: bool, allow_negative: bool) -> ReadOptions {
    color_for_stderr();
    ReadOptions::new()
        .with_validate(validate)
        .with_allow_negative(allow_negative)
        .with_highlight(stderr_wants_color())
}
