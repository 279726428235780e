//! # Async Prompted Reader
//!
//! The [`Terminal`](crate::utils::Terminal) loop on top of tokio I/O. Same
//! validation, diagnostics and error rules; the difference is that a pending
//! read can be interrupted through a [`CancellationToken`], which is how a
//! caller bounds an otherwise endless prompt (Ctrl-C, a deadline, shutdown).
//!
//! Only available with the `tokio-dep` feature.
//!
//! ```rust,no_run
//! use numprompt::utils::{AsyncTerminal, ReadOptions};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<(), numprompt::utils::ReadError> {
//! let token = CancellationToken::new();
//! let mut terminal = AsyncTerminal::stdio().with_cancellation(token.clone());
//!
//! let mut speed = 0.0_f32;
//! terminal.read_float(&mut speed, ReadOptions::new()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! A cancelled read may already have consumed part of a line; that input is
//! dropped.
use tokio::io::{
    self, AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
    Stderr, Stdin,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::utils::convert::Numeric;
use crate::utils::error::ReadError;
use crate::utils::options::{LINE_CAPACITY, OverlongLine, ReadOptions};
use crate::utils::terminal::{Attempts, Verdict, finish_line, overflowed};

pub struct AsyncTerminal<R, W> {
    reader: R,
    diagnostics: W,
    cancel: CancellationToken,
}

impl AsyncTerminal<BufReader<Stdin>, Stderr> {
    /// tokio's stdin and stderr.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R, W> AsyncTerminal<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, diagnostics: W) -> Self {
        Self {
            reader,
            diagnostics,
            cancel: CancellationToken::new(),
        }
    }

    /// Replaces the token that interrupts pending reads.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.diagnostics)
    }

    pub async fn read_int(&mut self, out: &mut i32, options: ReadOptions) -> Result<(), ReadError> {
        *out = self.read::<i32>(options).await?;
        Ok(())
    }

    pub async fn read_float(
        &mut self,
        out: &mut f32,
        options: ReadOptions,
    ) -> Result<(), ReadError> {
        *out = self.read::<f32>(options).await?;
        Ok(())
    }

    pub async fn read<T: Numeric>(&mut self, options: ReadOptions) -> Result<T, ReadError> {
        let mut attempts = Attempts::new(T::KIND, options);
        let mut line = self.next_line(options.overlong).await?;

        loop {
            match attempts.judge(&line) {
                Verdict::Accept => break,
                Verdict::GiveUp(e) => return Err(e),
                Verdict::Retry => {
                    self.write_diagnostic(&attempts.diagnostic()).await?;
                    line = self.next_line(options.overlong).await?;
                }
            }
        }

        Ok(T::from_lenient(&line))
    }

    async fn next_line(&mut self, overlong: OverlongLine) -> Result<String, ReadError> {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => {
                debug!("read cancelled");
                Err(ReadError::Cancelled)
            }
            line = capture_line(&mut self.reader, overlong) => line,
        }
    }

    async fn write_diagnostic(&mut self, text: &str) -> Result<(), ReadError> {
        self.diagnostics
            .write_all(text.as_bytes())
            .await
            .map_err(ReadError::Diagnostic)?;
        self.diagnostics.flush().await.map_err(ReadError::Diagnostic)
    }
}

async fn capture_line<R>(reader: &mut R, overlong: OverlongLine) -> Result<String, ReadError>
where
    R: AsyncBufRead + Unpin,
{
    let mut raw = Vec::with_capacity(LINE_CAPACITY);
    let read = (&mut *reader)
        .take(LINE_CAPACITY as u64)
        .read_until(b'\n', &mut raw)
        .await
        .map_err(ReadError::read_failed)?;

    if read == 0 {
        return Err(ReadError::closed());
    }

    let overflowed = overflowed(&raw);
    if overflowed {
        skip_rest_of_line(reader)
            .await
            .map_err(ReadError::read_failed)?;
    }

    finish_line(raw, overflowed, overlong)
}

async fn skip_rest_of_line<R>(reader: &mut R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let (used, done) = {
            let buf = reader.fill_buf().await?;
            match buf.iter().position(|&b| b == b'\n') {
                Some(i) => (i + 1, true),
                None => (buf.len(), buf.is_empty()),
            }
        };
        reader.consume(used);
        if done {
            return Ok(());
        }
    }
}
