//! Routes a decoded invocation to its resolver.

use std::sync::Arc;

use tracing::debug;

use fieldrun_protocol::{InvocationRequest, InvocationResult};

use crate::error::DispatchError;
use crate::registry::ResolverRegistry;

/// Looks up and invokes resolvers from a shared, read-only registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ResolverRegistry>,
}

impl Dispatcher {
    /// Creates a dispatcher over `registry`.
    pub fn new(registry: impl Into<Arc<ResolverRegistry>>) -> Self {
        Self {
            registry: registry.into(),
        }
    }

    /// The registry this dispatcher reads from.
    pub fn registry(&self) -> &ResolverRegistry {
        &self.registry
    }

    /// Invokes the resolver named by `request` exactly once.
    ///
    /// The resolver receives the arguments with the parent embedded, and
    /// the raw parent again as its second input.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::ResolverNotFound` if no resolver is
    /// registered for the key, `DispatchError::ResolverExecution` if the
    /// resolver fails.
    #[tracing::instrument(skip_all, fields(resolver = %request.key()))]
    pub async fn dispatch(
        &self,
        request: &InvocationRequest,
    ) -> Result<InvocationResult, DispatchError> {
        let key = request.key();

        let resolver = self
            .registry
            .lookup(key)
            .ok_or_else(|| DispatchError::ResolverNotFound {
                type_name: key.type_name().to_string(),
                field_name: key.field_name().to_string(),
            })?;

        let args = request.merged_args();
        let parent = request.parent().cloned();
        debug!(
            arg_count = args.len(),
            has_parent = parent.is_some(),
            "invoking resolver"
        );

        let output = resolver
            .resolve(args, parent)
            .await
            .map_err(|source| DispatchError::ResolverExecution {
                resolver: key.to_string(),
                source,
            })?;

        if output.as_ref().map_or(true, |v| v.is_null()) {
            debug!("resolver returned nothing, substituting empty object");
        }
        Ok(InvocationResult::from_output(output))
    }
}
