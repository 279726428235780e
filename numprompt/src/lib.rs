//! # numprompt
//!
//! Small helpers for interactive CLI programs that need a number from the
//! user. A reader pulls one line at a time, checks it against a strict
//! character grammar and, until the line is acceptable, prints a short
//! diagnostic and asks again.
//!
//! ## Features
//!
//! (All feature versions)
//! - **Line Sanitizer** - [`is_valid_number`]: digits, an optional leading
//!   `-`, and `.` for floats. Pure, no I/O.
//! - **Prompted Reader** - [`read_int`] / [`read_float`] on stdin/stderr, or
//!   [`Terminal`](utils::Terminal) over any `BufRead` + `Write` pair.
//! - **Permissive conversion** - `strtol`/`strtof`-style parsing of the
//!   accepted line; unparsable text becomes zero when validation is off.
//!
//! ("tokio-dep" feature)
//! - **Async Prompted Reader** - `AsyncTerminal` over tokio I/O, with a
//!   `CancellationToken` to interrupt a pending prompt.
//!
//! ("serde" feature)
//! - `Serialize`/`Deserialize` for [`ReadOptions`] and the policy types.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! numprompt = "0.1"
//! numprompt = { version = "0.1", features = ["tokio-dep"] }
//! ```
//!
//! ## Usage Examples
//!
//! ### Reading from stdin
//!
//! ```rust,no_run
//! use numprompt::{read_float, read_int};
//!
//! let mut count = 0;
//! let mut ratio = 0.0;
//!
//! // validate, non-negative only
//! read_int(&mut count, true, false).expect("stdin closed");
//! // validate, negatives allowed
//! read_float(&mut ratio, true, true).expect("stdin closed");
//! ```
//!
//! ### Custom streams and options
//!
//! ```rust
//! use std::io::Cursor;
//! use numprompt::utils::{ReadOptions, Terminal};
//!
//! let mut terminal = Terminal::new(Cursor::new("ten\n10\n"), Vec::new());
//! let threads: i32 = terminal
//!     .read(ReadOptions::new().with_max_retries(3).with_highlight(false))
//!     .unwrap();
//!
//! let (_, diagnostics) = terminal.into_parts();
//! assert_eq!(threads, 10);
//! assert_eq!(
//!     String::from_utf8(diagnostics).unwrap(),
//!     "\nMust be a non-negative integer! Retry...\n"
//! );
//! ```
//!
//! ## Error Handling
//!
//! Bad input is never an error while validating; the reader just asks
//! again. A call fails only when no acceptable line can be obtained:
//!
//! ```rust,no_run
//! use numprompt::{read_int, ReadError};
//!
//! let mut n = 0;
//! match read_int(&mut n, true, true) {
//!     Ok(()) => println!("got {n}"),
//!     Err(ReadError::StreamClosed { .. }) => eprintln!("no more input"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (rejected lines, truncation, closed
//! input) and leaves subscriber setup to the application. Diagnostics meant
//! for the user are written to the diagnostic stream, not to `tracing`.

pub mod utils;

pub use utils::{ReadError, ReadOptions, is_valid_number, read_float, read_int};
