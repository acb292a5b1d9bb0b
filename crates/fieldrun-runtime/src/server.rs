//! Single-shot invocation server.
//!
//! Reads one request from a [`RequestSource`], dispatches it, and writes
//! the result to a [`ResultSink`]. Each step completes before the next
//! starts; nothing is written unless the resolver succeeded.

use tracing::{info, warn};

use fieldrun_protocol::{InvocationRequest, InvocationResult};

use crate::dispatcher::Dispatcher;
use crate::error::DispatchError;
use crate::io::{RequestSource, ResultSink};

/// Ties a request source and result sink to a dispatcher.
pub struct ResolverServer<S, K> {
    source: S,
    sink: K,
    dispatcher: Dispatcher,
}

impl<S, K> ResolverServer<S, K>
where
    S: RequestSource,
    K: ResultSink,
{
    /// Creates a server with the given boundary adapters and dispatcher.
    pub fn new(source: S, sink: K, dispatcher: Dispatcher) -> Self {
        Self {
            source,
            sink,
            dispatcher,
        }
    }

    /// Handles exactly one invocation.
    ///
    /// Can be called again; every call reads a fresh request and shares
    /// nothing with earlier calls except the registry.
    pub async fn run(&mut self) -> Result<InvocationResult, DispatchError> {
        match self.run_once().await {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!(error = %e, "invocation failed");
                Err(e)
            }
        }
    }

    #[tracing::instrument(name = "invocation", skip_all)]
    async fn run_once(&mut self) -> Result<InvocationResult, DispatchError> {
        // 1. Read and decode
        let bytes = self.source.read_request().await?;
        let request = InvocationRequest::from_slice(&bytes)?;

        // 2. Dispatch
        let result = self.dispatcher.dispatch(&request).await?;

        // 3. Encode fully, then persist
        let document = result.to_vec().map_err(|e| DispatchError::OutputWrite {
            reason: format!("cannot encode result: {e}"),
        })?;
        self.sink.write_result(&document).await?;

        info!(
            resolver = %request.key(),
            bytes = document.len(),
            "invocation completed"
        );
        Ok(result)
    }

    /// The dispatcher used by this server.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// The result sink, e.g. to inspect an in-memory buffer.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Consumes the server, returning its boundary adapters.
    pub fn into_parts(self) -> (S, K) {
        (self.source, self.sink)
    }
}
