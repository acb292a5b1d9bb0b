//! # fieldrun-runtime
//!
//! Resolver dispatch for the single-shot invocation protocol.
//!
//! Build a [`ResolverRegistry`] from resolver functions, wrap it in a
//! [`Dispatcher`], then hand the dispatcher plus a request source and
//! result sink to a [`ResolverServer`] and call `run()` once per
//! invocation.

pub mod dispatcher;
pub mod error;
pub mod io;
pub mod registry;
pub mod resolver;
pub mod server;

pub use dispatcher::Dispatcher;
pub use error::{DispatchError, RegistryError};
pub use io::{RequestSource, ResultSink, TransportError};
pub use registry::{ObjectResolvers, RegistryBuilder, ResolverRegistry};
pub use resolver::{
    resolver_fn, sync_fn, typed, AdapterError, FnResolver, Resolver, ResolverError,
    ResolverOutput, SyncFnResolver, TypedResolver,
};
pub use server::ResolverServer;
