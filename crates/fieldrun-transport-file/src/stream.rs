//! Stream boundary over any async reader/writer.
//!
//! Generic over reader/writer for testability; `stdin()`/`stdout()`
//! cover the pipe case.

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

use fieldrun_runtime::{RequestSource, ResultSink, TransportError};

const STREAM_TARGET: &str = "stream";

/// Reads the request document until EOF.
pub struct StreamSource<R> {
    reader: R,
}

impl<R> StreamSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl StreamSource<tokio::io::Stdin> {
    /// Source reading the process stdin.
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

#[async_trait]
impl<R> RequestSource for StreamSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn read_request(&mut self) -> Result<Vec<u8>, TransportError> {
        let mut buf = Vec::new();
        self.reader
            .read_to_end(&mut buf)
            .await
            .map_err(|e| TransportError::Read {
                target: STREAM_TARGET.into(),
                reason: e.to_string(),
            })?;
        trace!(len = buf.len(), "read request from stream");
        Ok(buf)
    }
}

/// Writes the result document, newline terminated, and flushes.
pub struct StreamSink<W> {
    writer: W,
}

impl<W> StreamSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl StreamSink<tokio::io::Stdout> {
    /// Sink writing to the process stdout.
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

#[async_trait]
impl<W> ResultSink for StreamSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn write_result(&mut self, document: &[u8]) -> Result<(), TransportError> {
        trace!(len = document.len(), "writing result to stream");
        let write_err = |e: std::io::Error| TransportError::Write {
            target: STREAM_TARGET.into(),
            reason: e.to_string(),
        };
        self.writer.write_all(document).await.map_err(write_err)?;
        self.writer.write_all(b"\n").await.map_err(write_err)?;
        self.writer.flush().await.map_err(write_err)?;
        Ok(())
    }
}
