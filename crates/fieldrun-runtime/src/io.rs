//! I/O ports for the invocation boundary.
//!
//! The server never touches the filesystem directly; adapters (files,
//! streams, in-memory buffers) implement these traits.

use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by boundary adapters.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request document could not be read.
    #[error("cannot read {target}: {reason}")]
    Read { target: String, reason: String },
    /// The result document could not be written.
    #[error("cannot write {target}: {reason}")]
    Write { target: String, reason: String },
}

/// Where one invocation request comes from.
#[async_trait]
pub trait RequestSource: Send {
    /// Reads the complete request document.
    async fn read_request(&mut self) -> Result<Vec<u8>, TransportError>;
}

/// Where one invocation result goes.
///
/// Implementations must either persist the whole document or nothing.
#[async_trait]
pub trait ResultSink: Send {
    /// Writes the complete result document.
    async fn write_result(&mut self, document: &[u8]) -> Result<(), TransportError>;
}

#[async_trait]
impl<T> RequestSource for Box<T>
where
    T: RequestSource + ?Sized,
{
    async fn read_request(&mut self) -> Result<Vec<u8>, TransportError> {
        (**self).read_request().await
    }
}

#[async_trait]
impl<T> ResultSink for Box<T>
where
    T: ResultSink + ?Sized,
{
    async fn write_result(&mut self, document: &[u8]) -> Result<(), TransportError> {
        (**self).write_result(document).await
    }
}
