//! Errors returned by the prompted readers.
//!
//! A rejected line is not an error: the reader reports it on the diagnostic
//! stream and asks again. Only the outcomes below end a call without a value,
//! and in all of them the caller's output slot is left untouched.
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadError {
    /// The input ended, or failed, before a usable line arrived.
    #[error("input stream closed before a value was read")]
    StreamClosed {
        #[source]
        source: Option<io::Error>,
    },

    /// The configured retry cap was reached.
    #[error("gave up after {attempts} invalid lines")]
    RetriesExhausted { attempts: u32 },

    /// A line exceeded the buffer and the options ask to reject it.
    #[error("input line is longer than {limit} bytes")]
    LineTooLong { limit: usize },

    /// The cancellation token fired while waiting for input.
    #[error("read cancelled")]
    Cancelled,

    /// The diagnostic stream could not be written.
    #[error("failed to write diagnostic: {0}")]
    Diagnostic(#[source] io::Error),
}

impl ReadError {
    pub(crate) fn closed() -> Self {
        Self::StreamClosed { source: None }
    }

    pub(crate) fn read_failed(source: io::Error) -> Self {
        Self::StreamClosed {
            source: Some(source),
        }
    }

    /// `true` for [`ReadError::StreamClosed`].
    pub fn is_stream_closed(&self) -> bool {
        matches!(self, Self::StreamClosed { .. })
    }
}
